//! Client configuration loaded from environment variables.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for talking to the user API.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Upper bound on a single streak write
    pub request_timeout: Duration,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("STREAK_API_BASE_URL")
            .map_err(|_| ConfigError::Missing("STREAK_API_BASE_URL"))?;

        let timeout_secs = match env::var("STREAK_API_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            name: "STREAK_API_TIMEOUT_SECS",
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
