//! Configuration for the catalog server.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Which store implementation backs the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, lost on restart.
    #[default]
    Memory,
    /// Sled document store under `store.data_dir`.
    Sled,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sled" => Ok(StoreBackend::Sled),
            other => Err(ConfigError::ParseError(format!(
                "unknown store backend: {other}"
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// HTTP API listen address.
    #[serde(default = "default_http_addr")]
    pub http_addr: SocketAddr,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub cache: CacheConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            http_addr: default_http_addr(),
            store: StoreConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

fn default_http_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory of the sled database. Ignored by the memory backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Fill the store with the mock catalog on startup. The sled backend only
    /// seeds an empty database.
    #[serde(default = "default_seed_mock_data")]
    pub seed_mock_data: bool,

    /// Artificial delay per operation for the memory backend.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: default_data_dir(),
            seed_mock_data: default_seed_mock_data(),
            latency_ms: 0,
        }
    }
}

impl StoreConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_seed_mock_data() -> bool {
    true
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Upper bound on cached entities.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
        }
    }
}

fn default_max_capacity() -> u64 {
    10_000
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();

        assert_eq!(config.http_addr, default_http_addr());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.seed_mock_data);
        assert_eq!(config.store.latency(), Duration::ZERO);
        assert_eq!(config.cache.max_capacity, 10_000);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            http_addr = "0.0.0.0:9000"

            [store]
            backend = "sled"
            data_dir = "/var/lib/catalog"
            seed_mock_data = false
            latency_ms = 250

            [cache]
            max_capacity = 128
        "#;

        let config = CatalogConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.http_addr.port(), 9000);
        assert_eq!(config.store.backend, StoreBackend::Sled);
        assert_eq!(config.store.data_dir, PathBuf::from("/var/lib/catalog"));
        assert!(!config.store.seed_mock_data);
        assert_eq!(config.store.latency(), Duration::from_millis(250));
        assert_eq!(config.cache.max_capacity, 128);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = CatalogConfig::from_toml_str("[store]\nbackend = \"mongo\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!("mongo".parse::<StoreBackend>().is_err());
        assert_eq!("SLED".parse::<StoreBackend>().unwrap(), StoreBackend::Sled);
    }

    #[test]
    fn test_example_config_parses() {
        let config = CatalogConfig::from_toml_str(include_str!("../catalog.example.toml")).unwrap();
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.cache.max_capacity, 10_000);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "[cache]\nmax_capacity = 3\n").unwrap();

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.cache.max_capacity, 3);

        let missing = CatalogConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::IoError(_))));
    }
}
