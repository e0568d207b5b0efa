//! Connection configuration types for the OpenScale client.
//!
//! Responsibilities:
//! - Define connection settings (service URL, TLS verification, timeout, retries).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `retries: None` means retries are disabled.

use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL_SECS, DEFAULT_SERVICE_URL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Retry settings handed to the transport when retries are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt
    pub max_retries: usize,
    /// Cap on the delay between attempts (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub max_retry_interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            max_retry_interval: Duration::from_secs(DEFAULT_MAX_RETRY_INTERVAL_SECS),
        }
    }
}

/// Connection configuration for the OpenScale service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Service URL including any instance path prefix (no trailing slash)
    pub service_url: String,
    /// Whether to skip TLS certificate verification
    #[serde(default)]
    pub disable_ssl_verification: bool,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Retry settings; `None` disables retries
    #[serde(default)]
    pub retries: Option<RetryConfig>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    fn with_strategy(service_url: String, strategy: AuthStrategy) -> Self {
        Self {
            connection: ConnectionConfig {
                service_url,
                disable_ssl_verification: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                retries: None,
            },
            auth: AuthConfig { strategy },
        }
    }

    /// Create a new config with the specified service URL and bearer token.
    pub fn with_bearer_token(service_url: String, token: SecretString) -> Self {
        Self::with_strategy(service_url, AuthStrategy::BearerToken { token })
    }

    /// Create a new config with the specified service URL and basic credentials.
    pub fn with_basic_auth(service_url: String, username: String, password: SecretString) -> Self {
        Self::with_strategy(service_url, AuthStrategy::Basic { username, password })
    }

    /// Create a new config that sends no credentials.
    pub fn without_auth(service_url: String) -> Self {
        Self::with_strategy(service_url, AuthStrategy::NoAuth)
    }
}

impl Default for Config {
    /// Public service URL, no authentication, retries disabled.
    fn default() -> Self {
        Self::without_auth(DEFAULT_SERVICE_URL.to_string())
    }
}
