use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-leaf"></i> {" Nature Lens"}</h1>
            <p class="subtitle">{"Discover the world of plants around you. Snap a photo to learn more."}</p>
        </header>
    }
}
