use crate::gallery::item::GalleryItem;
use std::collections::BTreeMap;

/// Distinct attribute values for one category across all items: trimmed,
/// non-empty, deduplicated, sorted lexicographically. Items without a value
/// for the category contribute nothing.
pub fn distinct_values(items: &[GalleryItem], category: &str) -> Vec<String> {
    let mut values: Vec<String> = items
        .iter()
        .filter_map(|item| item.value(category))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Per-category selection state: at most one selected value per category.
/// Never persisted; lives only for the page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    selected: BTreeMap<String, String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-select with deselect: clicking the active value clears it,
    /// any other value replaces the category's prior selection.
    pub fn toggle(&mut self, category: &str, value: &str) {
        if self.selected.get(category).map(String::as_str) == Some(value) {
            self.selected.remove(category);
        } else {
            self.selected.insert(category.to_string(), value.to_string());
        }
    }

    /// Clear every category's selection.
    pub fn reset(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, category: &str, value: &str) -> bool {
        self.selected.get(category).map(String::as_str) == Some(value)
    }

    /// Whether any category has a selection. Drives the clear control.
    pub fn any_active(&self) -> bool {
        !self.selected.is_empty()
    }

    /// An item matches iff its value equals the selection in every filtered
    /// category (exact, case-sensitive). A missing value never matches.
    pub fn matches(&self, item: &GalleryItem) -> bool {
        self.selected
            .iter()
            .all(|(category, value)| item.value(category) == Some(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::item::Catalog;

    fn sample_items() -> Vec<GalleryItem> {
        Catalog::from_json(
            r#"{"items": [
                {"title": "Sofa",     "room": "Living",  "colour": "Blue",  "style": "Modern"},
                {"title": "Armchair", "room": "Living",  "colour": "Green", "style": "Classic"},
                {"title": "Bed",      "room": "Bedroom", "colour": "Blue",  "style": "Modern"},
                {"title": "Mirror",   "colour": " Blue "}
            ]}"#,
        )
        .unwrap()
        .items
    }

    #[test]
    fn test_distinct_values_sorted_deduped_trimmed() {
        let items = sample_items();
        assert_eq!(distinct_values(&items, "room"), vec!["Bedroom", "Living"]);
        assert_eq!(distinct_values(&items, "colour"), vec!["Blue", "Green"]);
        // unknown category discovers nothing
        assert!(distinct_values(&items, "material").is_empty());
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut filters = ActiveFilters::new();
        let before = filters.clone();

        filters.toggle("room", "Living");
        assert!(filters.is_selected("room", "Living"));

        filters.toggle("room", "Living");
        assert_eq!(filters, before);
        assert!(!filters.any_active());
    }

    #[test]
    fn test_selection_is_exclusive_per_category() {
        let mut filters = ActiveFilters::new();
        filters.toggle("room", "Living");
        filters.toggle("room", "Bedroom");

        assert!(filters.is_selected("room", "Bedroom"));
        assert!(!filters.is_selected("room", "Living"));
    }

    #[test]
    fn test_matches_intersects_all_active_categories() {
        let items = sample_items();
        let mut filters = ActiveFilters::new();

        // no filters: everything matches
        assert!(items.iter().all(|i| filters.matches(i)));

        filters.toggle("room", "Living");
        let visible: Vec<&str> = items
            .iter()
            .filter(|i| filters.matches(i))
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Sofa", "Armchair"]);

        filters.toggle("colour", "Blue");
        let visible: Vec<&str> = items
            .iter()
            .filter(|i| filters.matches(i))
            .map(|i| i.title.as_str())
            .collect();
        assert_eq!(visible, vec!["Sofa"]);
    }

    #[test]
    fn test_missing_value_never_matches_active_filter() {
        let items = sample_items();
        let mut filters = ActiveFilters::new();
        filters.toggle("room", "Living");

        let mirror = &items[3];
        assert!(!filters.matches(mirror));

        // matching is exact: the stored " Blue " is not trimmed at match time
        filters.reset();
        filters.toggle("colour", "Blue");
        assert!(!filters.matches(mirror));
    }

    #[test]
    fn test_reset_restores_full_visibility() {
        let items = sample_items();
        let mut filters = ActiveFilters::new();
        filters.toggle("room", "Living");
        filters.toggle("colour", "Blue");
        filters.toggle("style", "Modern");
        assert!(filters.any_active());

        filters.reset();
        assert!(!filters.any_active());
        assert!(items.iter().all(|i| filters.matches(i)));
    }

    #[test]
    fn test_living_scenario() {
        let items = sample_items();
        let mut filters = ActiveFilters::new();

        filters.toggle("room", "Living");
        for item in &items {
            assert_eq!(filters.matches(item), item.value("room") == Some("Living"));
        }

        filters.toggle("room", "Living");
        assert!(items.iter().all(|i| filters.matches(i)));
    }
}
