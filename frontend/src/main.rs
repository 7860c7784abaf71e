mod api;
mod components;

use components::{camera_section, handlers, header, preview_area, results, theme_toggle, upload_section, utils};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::PlantIdentification;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, HtmlVideoElement, MediaStream};
use yew::prelude::*;

// Models
#[derive(Clone, Copy, PartialEq, Eq)]
enum InputTab {
    Upload,
    Camera,
}

// Yew msg components
enum Msg {
    // Image selection
    FileSelected(GlooFile),
    ImageLoaded(String),
    ClearImage,

    // Camera operations
    StartCamera,
    CameraReady(MediaStream),
    CameraFailed(String),
    CaptureImage,
    StopCamera,

    // Identification
    Identify,
    IdentifySucceeded(PlantIdentification),
    IdentifyFailed(String),

    // UI states
    SwitchTab(InputTab),
    SetError(Option<String>),
    SetDragging(bool),
    ToggleTheme,

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    preview: Option<String>,
    result: Option<PlantIdentification>,
    loading: bool,
    error: Option<String>,
    is_dragging: bool,
    active_tab: InputTab,
    camera_stream: Option<MediaStream>,
    camera_error: Option<String>,
    theme: String,
    reader: Option<FileReader>,
    paste_listener: Option<EventListener>,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            preview: None,
            result: None,
            loading: false,
            error: None,
            is_dragging: false,
            active_tab: InputTab::Upload,
            camera_stream: None,
            camera_error: None,
            theme: "light".to_string(),
            reader: None,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image selection
            Msg::FileSelected(file) => handlers::handle_file_selected(self, ctx, file),
            Msg::ImageLoaded(data_uri) => handlers::handle_image_loaded(self, data_uri),
            Msg::ClearImage => handlers::handle_clear_image(self),

            // Camera operations
            Msg::StartCamera => handlers::handle_start_camera(self, ctx),
            Msg::CameraReady(stream) => handlers::handle_camera_ready(self, stream),
            Msg::CameraFailed(message) => handlers::handle_camera_failed(self, message),
            Msg::CaptureImage => handlers::handle_capture_image(self, ctx),
            Msg::StopCamera => {
                handlers::stop_camera_tracks(self);
                true
            }

            // Identification
            Msg::Identify => handlers::handle_identify(self, ctx),
            Msg::IdentifySucceeded(result) => handlers::handle_identify_succeeded(self, result),
            Msg::IdentifyFailed(message) => handlers::handle_identify_failed(self, message),

            // UI states
            Msg::SwitchTab(tab) => handlers::handle_switch_tab(self, tab),
            Msg::SetError(error) => {
                self.error = error;
                self.loading = false;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The <video> element only exists after the stream arrives, so the
        // attachment has to happen post-render.
        if let Some(stream) = &self.camera_stream {
            let video = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("camera-video"))
                .and_then(|e| e.dyn_into::<HtmlVideoElement>().ok());

            if let Some(video) = video {
                if video.src_object().is_none() {
                    video.set_src_object(Some(stream));
                }
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        handlers::stop_camera_tracks(self);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render_header() }
                { theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }

                <main class="main-content">
                    { upload_section::render_upload_section(self, ctx) }
                    { camera_section::render_camera_section(self, ctx) }
                    { preview_area::render_preview_area(self, ctx) }
                    { utils::render_error_message(self) }
                    { results::render_results(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Nature Lens | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
