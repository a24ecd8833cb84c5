//! Configuration management.

/// Application settings from environment variables (admin access code)
pub mod app;
/// Database connection and table creation
pub mod database;
/// Waste-type seed definitions loaded from config.toml
pub mod waste_types;
