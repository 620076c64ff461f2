//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use specimen_core::{DomainError, ListingDefaults};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("Invalid page limits: {0}")]
    Listing(#[from] DomainError),
}

/// Application configuration. Built once at startup and never re-read.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// JSON file with seed records in upstream DTO shape.
    pub fixtures_path: Option<PathBuf>,
    pub listing: ListingDefaults,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let number = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(key) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber { key, value }),
                None => Ok(default),
            }
        };

        let listing = ListingDefaults::new(
            number("DEFAULT_PAGE_LIMIT", ListingDefaults::DEFAULT_LIMIT)?,
            number("MAX_PAGE_LIMIT", ListingDefaults::MAX_LIMIT)?,
        )?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            fixtures_path: lookup("FIXTURES_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            listing,
        })
    }
}
