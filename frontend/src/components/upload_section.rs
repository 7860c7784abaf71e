use super::super::{InputTab, Model, Msg};
use super::utils::{debounce, first_image_file};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let tab_button = |tab: InputTab, icon: &str, label: &str| {
        let is_active = model.active_tab == tab;
        html! {
            <button
                class={classes!("tab-btn", is_active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SwitchTab(tab))}
            >
                <i class={format!("fa-solid {}", icon)}></i>{ format!(" {}", label) }
            </button>
        }
    };

    html! {
        <div class="upload-section">
            <div class="tab-bar">
                { tab_button(InputTab::Upload, "fa-upload", "Upload Image") }
                { tab_button(InputTab::Camera, "fa-camera", "Use Camera") }
            </div>
            {
                if model.active_tab == InputTab::Upload && model.preview.is_none() {
                    render_file_input_area(model, ctx)
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_image_file);

        input.set_value("");

        match file {
            Some(file) => Msg::FileSelected(file),
            None => Msg::SetError(Some("No valid image file selected.".into())),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Upload a plant image"}</p>
                    <p class="file-types">{"Drag & drop, paste, or click to select. Supported formats: JPG, PNG, WEBP"}</p>
                </div>
            </div>
        </>
    }
}
