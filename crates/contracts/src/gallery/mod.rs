pub mod config;
pub mod filter;
pub mod item;

pub use config::FilterConfig;
pub use filter::{distinct_values, ActiveFilters};
pub use item::{Catalog, GalleryItem};
