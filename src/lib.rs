//! Procedural checkmark icons written as PNG assets.

pub mod config;
pub mod error;
pub mod generator;
pub mod icon;
pub mod logger;
pub mod raster;

pub use config::GeneratorConfig;
pub use error::IconError;
pub use generator::generate_all;
pub use icon::{create_icon, CheckmarkGeometry, Icon};
