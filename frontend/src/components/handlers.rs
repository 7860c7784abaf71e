use super::super::{InputTab, Model, Msg};
use crate::api;
use crate::components::utils::first_image_file;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    CanvasRenderingContext2d, ClipboardEvent, DragEvent, HtmlCanvasElement, HtmlVideoElement,
    MediaStream, MediaStreamConstraints, MediaStreamTrack,
};
use yew::prelude::*;

pub fn handle_file_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    model.error = None;
    model.result = None;

    let link = ctx.link().clone();
    let reader = read_as_data_url(&file, move |result| match result {
        Ok(data_uri) => link.send_message(Msg::ImageLoaded(data_uri)),
        Err(e) => link.send_message(Msg::SetError(Some(format!("Failed to read file: {}", e)))),
    });

    // Dropping the reader aborts the read, so it lives on the model until the
    // callback fires or another file replaces it.
    model.reader = Some(reader);
    true
}

pub fn handle_image_loaded(model: &mut Model, data_uri: String) -> bool {
    model.preview = Some(data_uri);
    model.result = None;
    model.error = None;
    model.reader = None;
    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    model.preview = None;
    model.result = None;
    model.error = None;
    model.camera_error = None;
    model.reader = None;
    true
}

pub fn handle_switch_tab(model: &mut Model, tab: InputTab) -> bool {
    if model.active_tab == tab {
        return false;
    }

    stop_camera_tracks(model);
    handle_clear_image(model);
    model.active_tab = tab;
    true
}

pub fn handle_start_camera(model: &mut Model, ctx: &Context<Model>) -> bool {
    model.camera_error = None;
    model.preview = None;
    model.result = None;

    let link = ctx.link().clone();
    spawn_local(async move {
        match request_camera_stream().await {
            Ok(stream) => link.send_message(Msg::CameraReady(stream)),
            Err(message) => link.send_message(Msg::CameraFailed(message)),
        }
    });

    true
}

async fn request_camera_stream() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or_else(|| "No window object available.".to_string())?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|_| "Media devices are not available in this browser.".to_string())?;

    let constraints = MediaStreamConstraints::new();
    let video = js_sys::Object::new();
    Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("environment"),
    )
    .map_err(|_| "Failed to build camera constraints.".to_string())?;
    constraints.set_video(&video.into());

    let promise = media_devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|_| "The camera request was rejected.".to_string())?;

    let stream = JsFuture::from(promise).await.map_err(|e| {
        log::warn!("getUserMedia failed: {:?}", e);
        "Could not access camera. Please check your browser permissions and try again.".to_string()
    })?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| "Unexpected camera stream type.".to_string())
}

pub fn handle_camera_ready(model: &mut Model, stream: MediaStream) -> bool {
    // rendered() attaches the stream to the <video> element once it exists.
    model.camera_stream = Some(stream);
    model.camera_error = None;
    true
}

pub fn handle_camera_failed(model: &mut Model, message: String) -> bool {
    stop_camera_tracks(model);
    model.camera_error = Some(message);
    true
}

pub fn handle_capture_image(model: &mut Model, ctx: &Context<Model>) -> bool {
    let video = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("camera-video"))
        .and_then(|e| e.dyn_into::<HtmlVideoElement>().ok());

    let Some(video) = video else {
        model.camera_error = Some("The camera preview is not available.".to_string());
        return true;
    };

    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        model.camera_error = Some("The camera is still warming up. Try again.".to_string());
        return true;
    }

    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

    if let Some(context) = context {
        if context
            .draw_image_with_html_video_element(&video, 0.0, 0.0)
            .is_ok()
        {
            if let Ok(data_uri) = canvas.to_data_url_with_type("image/jpeg") {
                stop_camera_tracks(model);
                ctx.link().send_message(Msg::ImageLoaded(data_uri));
                return true;
            }
        }
    }

    model.camera_error = Some("Failed to capture a frame from the camera.".to_string());
    true
}

pub fn stop_camera_tracks(model: &mut Model) {
    if let Some(stream) = model.camera_stream.take() {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

pub fn handle_identify(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(data_uri) = model.preview.clone() else {
        ctx.link().send_message(Msg::SetError(Some(
            "Please select an image or take a picture first.".to_string(),
        )));
        return false;
    };

    model.loading = true;
    model.error = None;
    model.result = None;

    api::send_identify_request(ctx, data_uri);
    true
}

pub fn handle_identify_succeeded(model: &mut Model, result: shared::PlantIdentification) -> bool {
    model.result = Some(result);
    model.loading = false;
    true
}

pub fn handle_identify_failed(model: &mut Model, message: String) -> bool {
    model.error = Some(message);
    model.result = None;
    model.loading = false;
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            match first_image_file(&file_list) {
                Some(file) => ctx.link().send_message(Msg::FileSelected(file)),
                None => ctx.link().send_message(Msg::SetError(Some(
                    "No valid image files dropped.".to_string(),
                ))),
            }
        }
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if model.active_tab != InputTab::Upload {
        return false;
    }

    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if let Some(file) = first_image_file(&file_list) {
                event.prevent_default();
                ctx.link().send_message(Msg::FileSelected(file));
                return true;
            }
        }
    }
    false
}
