//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Location acquisition options as configured for the device.
#[derive(Debug, Clone)]
pub struct LocationConfig {
    /// Ask the platform for high-accuracy positioning.
    pub high_accuracy: bool,
    /// How long to wait for the platform before giving up (ms).
    pub timeout_ms: u64,
    /// How long a cached fix counts as current (ms).
    pub max_cache_age_ms: u64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_cache_age_ms: 300_000,
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location request options.
    pub location: LocationConfig,
    /// Where the JSON file store keeps its data.
    pub storage_path: PathBuf,
    /// Optional custom emergency directory (JSON array of services).
    pub directory_path: Option<PathBuf>,
    /// Key for the MPIN digest.
    pub pin_digest_key: Vec<u8>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            location: LocationConfig {
                high_accuracy: env::var("SAFEDIAL_HIGH_ACCURACY")
                    .map(|v| v != "false")
                    .unwrap_or(true),
                timeout_ms: env::var("SAFEDIAL_LOCATION_TIMEOUT_MS")
                    .unwrap_or_else(|_| "10000".to_string())
                    .parse()
                    .unwrap_or(10_000),
                max_cache_age_ms: env::var("SAFEDIAL_LOCATION_MAX_AGE_MS")
                    .unwrap_or_else(|_| "300000".to_string())
                    .parse()
                    .unwrap_or(300_000),
            },
            storage_path: env::var("SAFEDIAL_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/safedial_store.json")),
            directory_path: env::var("SAFEDIAL_DIRECTORY_PATH").ok().map(PathBuf::from),
            pin_digest_key: env::var("SAFEDIAL_PIN_KEY")
                .map_err(|_| ConfigError::Missing("SAFEDIAL_PIN_KEY"))?
                .into_bytes(),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            location: LocationConfig::default(),
            storage_path: PathBuf::from("data/test_store.json"),
            directory_path: None,
            pin_digest_key: b"test_pin_key_32_bytes_minimum!!!".to_vec(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
