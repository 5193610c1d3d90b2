use crate::gallery::controller::FilterController;
use contracts::gallery::GalleryItem;
use leptos::prelude::*;

/// The masonry grid. Items are rendered once in catalog order and only ever
/// shown or hidden; filtering never removes them from the DOM.
#[component]
pub fn GalleryGrid() -> impl IntoView {
    let controller =
        use_context::<FilterController>().expect("FilterController not provided in context");

    view! {
        <div class="masonry-grid" id="masonry-grid">
            {controller
                .items()
                .into_iter()
                .map(|item| view! { <GalleryCard item=item /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn GalleryCard(item: GalleryItem) -> impl IntoView {
    let controller =
        use_context::<FilterController>().expect("FilterController not provided in context");

    let card_class = {
        let item = item.clone();
        move || {
            if controller.is_visible(&item) {
                "masonry-item".to_string()
            } else {
                format!("masonry-item {}", controller.config().hidden_class)
            }
        }
    };

    let tags: Vec<String> = controller
        .config()
        .categories
        .iter()
        .filter_map(|category| item.value(category).map(str::to_string))
        .collect();

    view! {
        <figure class=card_class>
            {item.image.clone().map(|src| view! {
                <img src=src alt=item.title.clone() loading="lazy" />
            })}
            <figcaption>
                <span class="masonry-item__title">{item.title.clone()}</span>
                <span class="masonry-item__tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect_view()}
                </span>
            </figcaption>
        </figure>
    }
}
