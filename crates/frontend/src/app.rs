use crate::gallery::filter_bar::FilterBar;
use crate::gallery::grid::GalleryGrid;
use crate::gallery::FilterController;
use contracts::gallery::{Catalog, FilterConfig};
use leptos::prelude::*;

const CATALOG_JSON: &str = include_str!("../assets/gallery.json");

#[component]
pub fn App() -> impl IntoView {
    let catalog = match Catalog::from_json(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(e) => {
            // degrade to an empty gallery instead of failing the page
            log::error!("failed to load gallery catalog: {e:#}");
            Catalog::default()
        }
    };

    // Provide the filter controller to the whole page via context.
    provide_context(FilterController::new(catalog, FilterConfig::default()));

    view! {
        <main class="gallery-page">
            <h1 class="gallery-page__title">"Gallery"</h1>
            <FilterBar />
            <GalleryGrid />
        </main>
    }
}
