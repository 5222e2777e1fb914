//! Configuration for the trip record store
//!
//! TOML configuration with environment variable overrides and defaults that
//! work with no file present. Only two concerns are configurable: where the
//! record collection lives, and who the two travelers are.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::VisitorPair;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Remote document collection to read records from
    #[serde(default)]
    pub source: SourceConfig,

    /// The two named travelers
    #[serde(default)]
    pub visitors: VisitorPair,
}

/// Location of the record collection
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Base URL of the document store API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection name holding trip records
    #[serde(default = "default_collection")]
    pub collection: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:8080/api/v1".to_string()
}
fn default_collection() -> String {
    "markers".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            collection: default_collection(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read config file {}: {}", path, e))
        })?;

        toml::from_str(&contents).map_err(|e| {
            Error::Configuration(format!("Failed to parse config file {}: {}", path, e))
        })
    }

    /// Load configuration with environment variable overrides
    ///
    /// Reads the file named by `TRIPLOG_CONFIG` if set, otherwise defaults,
    /// then applies `TRIPLOG_SOURCE_URL` and `TRIPLOG_COLLECTION`.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = match std::env::var("TRIPLOG_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("TRIPLOG_SOURCE_URL") {
            self.source.base_url = url;
        }
        if let Ok(collection) = std::env::var("TRIPLOG_COLLECTION") {
            self.source.collection = collection;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = StoreConfig::default();
        assert_eq!(config.source.collection, "markers");
        assert_eq!(config.visitors.first, "Lara");
        assert_eq!(config.visitors.second, "Álvaro");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: StoreConfig = toml::from_str(
            r#"
            [source]
            base_url = "https://docs.example.com/v1"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.base_url, "https://docs.example.com/v1");
        assert_eq!(config.source.collection, "markers");
        assert_eq!(config.visitors.first, "Lara");
    }

    #[test]
    fn test_visitor_pair_override() {
        let config: StoreConfig = toml::from_str(
            r#"
            [visitors]
            first = "Ana"
            second = "Bea"
            "#,
        )
        .unwrap();
        assert_eq!(config.visitors, VisitorPair::new("Ana", "Bea"));
    }
}
