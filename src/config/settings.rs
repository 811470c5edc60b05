//! Application settings resolved from the environment.
//!
//! Everything has a sensible default so the demo runs with no setup at all;
//! each value can be overridden through an environment variable (usually via
//! the `.env` file loaded in `main`).

use crate::errors::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the directory holding the persisted blobs (default `./data`).
pub const DATA_DIR_ENV: &str = "SHOPSHELF_DATA_DIR";

/// Overrides the seed catalog location (default `./config.toml`).
pub const CATALOG_PATH_ENV: &str = "SHOPSHELF_CATALOG";

/// Overrides the reviewer identity used by the shell (default `1`).
pub const USER_ID_ENV: &str = "SHOPSHELF_USER_ID";

/// Resolved application configuration, shared across the startup sequence.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the store keeps its blobs in
    pub data_dir: PathBuf,
    /// Path to the TOML seed catalog
    pub catalog_path: PathBuf,
    /// User id attached to reviews submitted from the shell
    pub user_id: i64,
}

/// Loads the main application configuration from the environment.
///
/// # Errors
/// Returns an error if `SHOPSHELF_USER_ID` is set but is not an integer.
pub fn load_app_configuration() -> Result<AppConfig> {
    let data_dir = env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let catalog_path = env::var(CATALOG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    let user_id = match env::var(USER_ID_ENV) {
        Ok(raw) => raw.trim().parse().map_err(|_| Error::Config {
            message: format!("{USER_ID_ENV} must be an integer, got '{raw}'"),
        })?,
        Err(_) => 1,
    };

    Ok(AppConfig {
        data_dir,
        catalog_path,
        user_id,
    })
}
