use gloo_console::error;
use gloo_net::http::Request;
use shared::{ErrorResponse, IdentifyRequest, PlantIdentification};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{Model, Msg};

/// Posts the data URI to the backend and reports back through the component
/// link. The server always answers failures with an `{error}` body; anything
/// else is a transport problem.
pub fn send_identify_request(ctx: &Context<Model>, photo_data_uri: String) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let body = IdentifyRequest { photo_data_uri };

            let request = match Request::post("/api/identify").json(&body) {
                Ok(request) => request,
                Err(e) => {
                    error!(format!("Failed to build request: {:?}", e));
                    link.send_message(Msg::IdentifyFailed(format!(
                        "Failed to build request: {}",
                        e
                    )));
                    return;
                }
            };

            match request.send().await {
                Ok(response) => {
                    if response.ok() {
                        match response.json::<PlantIdentification>().await {
                            Ok(result) => link.send_message(Msg::IdentifySucceeded(result)),
                            Err(e) => link.send_message(Msg::IdentifyFailed(format!(
                                "Failed to parse response: {}",
                                e
                            ))),
                        }
                    } else {
                        let status = response.status();
                        let message = match response.json::<ErrorResponse>().await {
                            Ok(body) => body.error,
                            Err(_) => format!("Server error: {}", status),
                        };
                        link.send_message(Msg::IdentifyFailed(message));
                    }
                }
                Err(e) => {
                    error!(format!("Fetch error: {:?}", e));
                    link.send_message(Msg::IdentifyFailed(format!("Network error: {}", e)));
                }
            }
        }
    });
}
