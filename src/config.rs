//! Code for the configuration of the application.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The address the server binds to when none is configured.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// The configuration of the application.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// The configuration for the HTTP server.
    #[serde(default)]
    pub server: ServerConfig,
    /// The configuration for the product catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Parse a configuration from a toml file.
    pub fn from_file(file: &Path) -> Result<Self> {
        let config = std::fs::read_to_string(file)?;
        Self::from_str(&config)
    }

    /// Parse a configuration from a toml string.
    pub fn from_str(config: &str) -> Result<Self> {
        Ok(toml::from_str(config)?)
    }
}

/// The configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ServerConfig {
    /// `host:port` to bind to.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig { bind: default_bind() }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// The configuration for the product catalog.
#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CatalogConfig {
    /// Product ids to leave out of the catalog.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_config_from_str() {
        let config = r#"
            [server]
            bind = "0.0.0.0:9000"

            [catalog]
            exclude = ["1-test", "baby-gym"]
        "#;
        let config = Config::from_str(config).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.catalog.exclude, vec!["1-test", "baby-gym"]);
    }

    #[test]
    fn test_config_from_str_empty() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(config.catalog.exclude.is_empty());
    }

    #[test]
    fn test_config_from_str_partial() {
        let config = Config::from_str("[server]\n").unwrap();
        assert_eq!(config.server.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_config_rejects_bad_types() {
        assert!(Config::from_str("[catalog]\nexclude = 5\n").is_err());
    }
}
