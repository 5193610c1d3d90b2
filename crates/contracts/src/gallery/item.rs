use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One gallery unit. Items are fixed for the lifetime of the page: they are
/// only ever shown or hidden, never created or destroyed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Position in the catalog. Assigned on load, not part of the JSON.
    #[serde(skip)]
    pub id: usize,

    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    /// Category name -> attribute value. A category key may be absent.
    #[serde(flatten)]
    pub values: BTreeMap<String, String>,
}

impl GalleryItem {
    /// The item's raw value for a category, if it has one.
    pub fn value(&self, category: &str) -> Option<&str> {
        self.values.get(category).map(String::as_str)
    }
}

/// The fixed, ordered collection of gallery items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub items: Vec<GalleryItem>,
}

impl Catalog {
    /// Parse a catalog from JSON and assign each item its position as id.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut catalog: Catalog =
            serde_json::from_str(json).context("failed to parse gallery catalog")?;
        for (idx, item) in catalog.items.iter_mut().enumerate() {
            item.id = idx;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_assigns_positional_ids() {
        let catalog = Catalog::from_json(
            r#"{"items": [
                {"title": "Armchair", "room": "Living", "colour": "Blue"},
                {"title": "Bed", "room": "Bedroom"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[0].id, 0);
        assert_eq!(catalog.items[1].id, 1);
        assert_eq!(catalog.items[0].value("room"), Some("Living"));
        assert_eq!(catalog.items[1].value("colour"), None);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Catalog::from_json("not json").is_err());
        assert!(Catalog::from_json(r#"{"items": 42}"#).is_err());
    }
}
