use actix_files::Files;
use actix_web::{HttpResponse, web};
use log::{error, info, warn};
use shared::{ErrorResponse, IdentifyRequest};

use crate::gemini::client::GeminiClient;
use crate::gemini::error::IdentifyError;
use crate::gemini::request::ImagePayload;

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.service(web::resource("/api/identify").route(web::post().to(handle_identify)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn handle_identify(
    client: web::Data<GeminiClient>,
    request: web::Json<IdentifyRequest>,
) -> HttpResponse {
    let payload = match ImagePayload::from_data_uri(&request.photo_data_uri) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Rejected identify request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            });
        }
    };

    match client.identify(&payload).await {
        Ok(result) if result.is_plant => {
            info!("Identified plant: {}", result.common_name);
            HttpResponse::Ok().json(result)
        }
        Ok(result) => {
            // The model answered but classified the subject as not a plant.
            let err = IdentifyError::NotAPlant {
                description: result.description,
            };
            info!("{}", err);
            error_response(&err)
        }
        Err(e) => {
            error!("Identification failed: {}", e);
            error_response(&e)
        }
    }
}

fn error_response(err: &IdentifyError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
    };
    match err {
        IdentifyError::Configuration(_) => HttpResponse::ServiceUnavailable().json(body),
        IdentifyError::NotAPlant { .. } => HttpResponse::UnprocessableEntity().json(body),
        IdentifyError::InvalidResponse(_) | IdentifyError::Transport(_) => {
            HttpResponse::BadGateway().json(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use shared::{ErrorResponse, IdentifyRequest};

    use super::handle_identify;
    use crate::gemini::client::GeminiClient;
    use crate::gemini::config::GeminiConfig;

    fn placeholder_client() -> GeminiClient {
        GeminiClient::new(GeminiConfig {
            api_key: "your_gemini_api_key".to_string(),
            ..Default::default()
        })
    }

    // Placeholder credentials are rejected before any network attempt, so
    // these tests run without outbound access.

    #[actix_web::test]
    async fn placeholder_credential_returns_configuration_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(placeholder_client()))
                .route("/api/identify", web::post().to(handle_identify)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/identify")
            .set_json(IdentifyRequest {
                photo_data_uri: "data:image/png;base64,iVBORw0KGgo=".to_string(),
            })
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 503);

        let body: ErrorResponse = test::read_body_json(response).await;
        assert!(body.error.contains("GEMINI_API_KEY"));
    }

    #[actix_web::test]
    async fn malformed_payload_returns_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(placeholder_client()))
                .route("/api/identify", web::post().to(handle_identify)),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/identify")
            .set_json(IdentifyRequest {
                photo_data_uri: "not a data uri".to_string(),
            })
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), 400);

        let body: ErrorResponse = test::read_body_json(response).await;
        assert!(body.error.contains("data URI"));
    }
}
