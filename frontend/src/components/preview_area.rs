use super::super::{Model, Msg};
use super::utils::debounce;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(preview) = &model.preview else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            <div class="preview-frame">
                <img id="image-preview"
                    src={preview.clone()}
                    alt="Image Preview"
                    style="max-width:100%; max-height: 400px; object-fit: contain;" />
                <button
                    class="remove-btn"
                    title="Remove this image"
                    onclick={link.callback(|_| Msg::ClearImage)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.callback(|_| Msg::Identify).emit(())
                    })}
                    disabled={model.loading}
                >
                    { render_identify_button_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_identify_button_content(model: &Model) -> Html {
    if model.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Identifying..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Identify Plant"}</> }
    }
}
