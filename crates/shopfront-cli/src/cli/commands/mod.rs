//! CLI command handlers, one per file.

mod config;
mod filters;
mod image;

pub use config::run_config;
pub use filters::run_filters;
pub use image::run_image;
