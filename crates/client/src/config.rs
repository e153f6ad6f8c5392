//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FAIRSTORE_API_URL` - Base URL of the store API (default: `https://fakestoreapi.com`)
//! - `FAIRSTORE_USER_ID` - Cart owner user ID (default: 1)
//! - `FAIRSTORE_STATE_DIR` - Directory for the session store (default: `.fairstore`)
//! - `FAIRSTORE_CACHE_TTL_SECS` - Catalog cache time-to-live (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use fairstore_core::UserId;

const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
const DEFAULT_STATE_DIR: &str = ".fairstore";
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Fairstore client configuration.
#[derive(Debug, Clone)]
pub struct FairstoreConfig {
    /// Base URL of the remote store API. Normalized to end with `/` so
    /// endpoint paths can be joined onto it.
    pub api_url: Url,
    /// The user whose cart this client operates on. The upstream service
    /// has no per-user auth on cart endpoints; the ID selects the cart.
    pub user_id: UserId,
    /// Directory holding the persisted session file.
    pub state_dir: PathBuf,
    /// Time-to-live for cached catalog responses.
    pub cache_ttl: Duration,
    /// HTTP client cloned into every API client, so one connection pool
    /// serves all of them.
    pub http_client: reqwest::Client,
}

impl FairstoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = parse_api_url(&get_env_or_default("FAIRSTORE_API_URL", DEFAULT_API_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("FAIRSTORE_API_URL".to_string(), e))?;

        let user_id = get_env_or_default("FAIRSTORE_USER_ID", "1")
            .parse::<i32>()
            .map(UserId::new)
            .map_err(|e| ConfigError::InvalidEnvVar("FAIRSTORE_USER_ID".to_string(), e.to_string()))?;

        let state_dir = PathBuf::from(get_env_or_default("FAIRSTORE_STATE_DIR", DEFAULT_STATE_DIR));

        let cache_ttl = get_env_or_default(
            "FAIRSTORE_CACHE_TTL_SECS",
            &DEFAULT_CACHE_TTL_SECS.to_string(),
        )
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| {
            ConfigError::InvalidEnvVar("FAIRSTORE_CACHE_TTL_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            user_id,
            state_dir,
            cache_ttl,
            http_client: reqwest::Client::new(),
        })
    }

    /// A config pointed at an explicit base URL, with defaults elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not a valid absolute URL.
    pub fn with_api_url(api_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_url: parse_api_url(api_url)
                .map_err(|e| ConfigError::InvalidEnvVar("FAIRSTORE_API_URL".to_string(), e))?,
            user_id: UserId::new(1),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            http_client: reqwest::Client::new(),
        })
    }
}

/// Parse and normalize the API base URL (trailing slash so `Url::join`
/// appends instead of replacing the last path segment).
fn parse_api_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
