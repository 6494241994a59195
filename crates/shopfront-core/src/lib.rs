pub mod catalog;
pub mod config;
pub mod filters;
pub mod image_url;
pub mod logging;
