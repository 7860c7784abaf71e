mod gemini;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use gemini::client::GeminiClient;
use gemini::config::GeminiConfig;
use routes::configure_routes;
use std::env;

// Base64 images inflate quickly; leave headroom over the actix default.
const JSON_PAYLOAD_LIMIT: usize = 12 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    dotenv::dotenv().ok();

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let frontend_dir = if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        format!("{}/../frontend/dist", manifest_dir)
    } else {
        "/usr/src/app/frontend/dist".to_string()
    };

    // Resolve the Gemini credential once; the client never rereads the
    // environment. A bad setup is reported here and again per request.
    let config = GeminiConfig::from_env();
    match config.validate() {
        Ok(()) => log::info!("Gemini configuration detected (model: {})", config.model),
        Err(e) => log::warn!(
            "Gemini is not fully configured: {} Identification requests will be rejected until this is fixed.",
            e
        ),
    }

    let client = GeminiClient::new(config);

    let port = env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
