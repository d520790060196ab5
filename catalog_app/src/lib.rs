pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod product;
pub mod ui;
pub mod view;

pub use ui::App;
