use super::super::{InputTab, Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_camera_section(model: &Model, ctx: &Context<Model>) -> Html {
    if model.active_tab != InputTab::Camera || model.preview.is_some() {
        return html! {};
    }

    let link = ctx.link();

    if model.camera_stream.is_some() {
        return html! {
            <div class="camera-area">
                <video id="camera-video" autoplay=true playsinline=true muted=true></video>
                <div class="camera-controls">
                    <button
                        class="capture-btn"
                        title="Take picture"
                        onclick={link.callback(|_| Msg::CaptureImage)}
                    >
                        <i class="fa-solid fa-camera"></i>
                    </button>
                    <button
                        class="stop-btn"
                        title="Stop camera"
                        onclick={link.callback(|_| Msg::StopCamera)}
                    >
                        <i class="fa-solid fa-times"></i>
                    </button>
                </div>
            </div>
        };
    }

    if let Some(camera_error) = &model.camera_error {
        return html! {
            <div class="camera-area camera-error">
                <i class="fa-solid fa-shield-halved"></i>
                <p class="camera-error-title">{"Camera Error"}</p>
                <p>{ camera_error }</p>
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::StartCamera).emit(())
                    })}
                >
                    {"Try Again"}
                </button>
            </div>
        };
    }

    html! {
        <div class="camera-area camera-placeholder">
            <i class="fa-solid fa-camera"></i>
            <p>{"Ready to start?"}</p>
            <p class="file-types">{"Point your camera at a plant"}</p>
            <button
                class="analyze-btn"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.callback(|_| Msg::StartCamera).emit(())
                })}
            >
                <i class="fa-solid fa-video"></i>{" Start Camera"}
            </button>
        </div>
    }
}
