/// Seed catalog loading from config.toml
pub mod catalog;

/// Application settings from environment variables
pub mod settings;

pub use settings::{AppConfig, load_app_configuration};
