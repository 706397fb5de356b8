//! POS configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `ARJUNA_DATA_DIR` - Root directory of the key-value store (default: `data`)
//! - `ARJUNA_MOCK_LATENCY_MS` - Simulated API round-trip delay (default: 600)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default simulated API latency in milliseconds.
const DEFAULT_MOCK_LATENCY_MS: u64 = 600;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// POS application configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Root directory for persisted state (one JSON file per key).
    pub data_dir: PathBuf,
    /// Artificial delay applied to mock API calls to approximate real UX.
    /// Not a contract; tests run with zero.
    pub mock_latency: Duration,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }
}

impl PosConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("ARJUNA_DATA_DIR", "data"));
        let mock_latency_ms = parse_latency_ms(get_optional_env("ARJUNA_MOCK_LATENCY_MS"))?;

        Ok(Self {
            data_dir,
            mock_latency: Duration::from_millis(mock_latency_ms),
        })
    }

    /// A configuration suitable for tests: no latency, isolated data dir.
    #[must_use]
    pub fn for_tests(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            mock_latency: Duration::ZERO,
        }
    }
}

fn parse_latency_ms(value: Option<String>) -> Result<u64, ConfigError> {
    value.map_or(Ok(DEFAULT_MOCK_LATENCY_MS), |raw| {
        raw.parse::<u64>().map_err(|e| {
            ConfigError::InvalidEnvVar("ARJUNA_MOCK_LATENCY_MS".to_owned(), e.to_string())
        })
    })
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
