use contracts::gallery::{distinct_values, ActiveFilters, Catalog, FilterConfig, GalleryItem};
use leptos::prelude::*;

/// One filter dimension with its discovered values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub values: Vec<String>,
}

/// Discover the button groups once from the catalog: one group per
/// configured category, in config order, skipping categories for which no
/// item carries a value.
pub fn discover_groups(items: &[GalleryItem], config: &FilterConfig) -> Vec<CategoryGroup> {
    config
        .categories
        .iter()
        .filter_map(|category| {
            let values = distinct_values(items, category);
            if values.is_empty() {
                None
            } else {
                Some(CategoryGroup {
                    category: category.clone(),
                    values,
                })
            }
        })
        .collect()
}

/// Owns the gallery filter state for the page. Constructed once in `App`
/// and handed to the components via context.
#[derive(Clone, Copy)]
pub struct FilterController {
    items: StoredValue<Vec<GalleryItem>>,
    config: StoredValue<FilterConfig>,
    groups: StoredValue<Vec<CategoryGroup>>,
    active: RwSignal<ActiveFilters>,
}

impl FilterController {
    pub fn new(catalog: Catalog, config: FilterConfig) -> Self {
        let groups = discover_groups(&catalog.items, &config);
        log::debug!(
            "gallery filter: {} items, {} filter groups",
            catalog.items.len(),
            groups.len()
        );
        Self {
            items: StoredValue::new(catalog.items),
            config: StoredValue::new(config),
            groups: StoredValue::new(groups),
            active: RwSignal::new(ActiveFilters::new()),
        }
    }

    pub fn items(&self) -> Vec<GalleryItem> {
        self.items.get_value()
    }

    pub fn groups(&self) -> Vec<CategoryGroup> {
        self.groups.get_value()
    }

    pub fn config(&self) -> FilterConfig {
        self.config.get_value()
    }

    pub fn toggle(&self, category: &str, value: &str) {
        self.active.update(|filters| filters.toggle(category, value));
    }

    pub fn reset(&self) {
        self.active.update(|filters| filters.reset());
    }

    /// Reactive: whether this (category, value) pair is the current
    /// selection in its group.
    pub fn is_selected(&self, category: &str, value: &str) -> bool {
        self.active
            .with(|filters| filters.is_selected(category, value))
    }

    /// Reactive: whether any filter is active at all.
    pub fn any_active(&self) -> bool {
        self.active.with(|filters| filters.any_active())
    }

    /// Reactive: whether the item passes every active filter.
    pub fn is_visible(&self, item: &GalleryItem) -> bool {
        self.active.with(|filters| filters.matches(item))
    }
}
