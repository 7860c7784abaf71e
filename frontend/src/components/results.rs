use super::super::Model;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };

    let info_items = [
        ("fa-seedling", "Scientific Name", &result.scientific_name),
        ("fa-tree", "Species", &result.species),
        ("fa-globe", "Habitat", &result.habitat),
        ("fa-clock", "Lifespan", &result.lifespan),
    ];

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2>
                    <i class="fa-solid fa-leaf"></i>
                    { format!(" {}", result.common_name) }
                </h2>
            </div>
            <div class="detail-grid">
                { for info_items.iter().map(|(icon, label, value)| html! {
                    <div class="detail-item">
                        <i class={format!("fa-solid {}", icon)}></i>
                        <div>
                            <p class="detail-label">{ *label }</p>
                            <p class="detail-value">{ (*value).clone() }</p>
                        </div>
                    </div>
                })}
            </div>
            <div class="description">
                <h3>{"Description"}</h3>
                <p>{ result.description.clone() }</p>
            </div>
        </div>
    }
}
