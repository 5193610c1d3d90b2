pub mod controller;
pub mod filter_bar;
pub mod grid;

pub use controller::FilterController;
