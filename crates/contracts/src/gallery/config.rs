use serde::{Deserialize, Serialize};

/// Filter wiring, enumerated at construction time instead of hard-coding
/// category names and class conventions at the call sites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Filter dimensions, in display order. A category that discovers no
    /// values renders no button group.
    pub categories: Vec<String>,
    /// Marker class for hidden gallery items.
    pub hidden_class: String,
    /// Marker class for the selected button in a group.
    pub active_class: String,
    /// Marker class for the clear control while any filter is active.
    pub visible_class: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            categories: vec![
                "room".to_string(),
                "colour".to_string(),
                "style".to_string(),
            ],
            hidden_class: "hidden".to_string(),
            active_class: "active".to_string(),
            visible_class: "visible".to_string(),
        }
    }
}

impl FilterConfig {
    /// Element id for a category's button group container.
    pub fn group_id(&self, category: &str) -> String {
        format!("filter-group-{category}")
    }
}
