//! Waste-type seed configuration loading from config.toml.
//!
//! The waste types defined in config.toml are used to seed an empty catalog
//! on first run; an already-populated database is left untouched.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of waste types to seed
    pub waste_types: Vec<WasteTypeSeed>,
}

/// Seed definition for a single waste type
#[derive(Debug, Deserialize, Clone)]
pub struct WasteTypeSeed {
    /// Display name of the waste type
    pub name: String,
    /// Bottles required per trashbag reward
    pub trashbags_per_bottle: i64,
    /// Legacy Rupiah rate per kilogram, omitted for bottle-only types
    pub price_per_kg: Option<f64>,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is invalid,
/// or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed configuration from the default location (./config.toml).
pub fn load_default_config() -> Result<SeedConfig> {
    load_config("config.toml")
}
