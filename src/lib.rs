pub mod config;
pub mod date_utils;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod snapshot;

/// Application version from Cargo.toml (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
