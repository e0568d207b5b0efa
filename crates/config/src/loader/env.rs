//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Derive the variable prefix from the service name.
//! - Read and parse prefixed variables from any key/value source
//!   (process environment or a credentials file) into a `ConfigLoader`.
//!
//! Does NOT handle:
//! - Locating or reading credentials files (see credentials_file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid values return ConfigError::InvalidValue naming the full variable.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;
use crate::types::AuthType;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(non_blank)
}

pub(crate) fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

/// Variable prefix for a service name: `watson_openscale` → `WATSON_OPENSCALE`.
pub fn env_prefix(service_name: &str) -> String {
    service_name.trim().to_ascii_uppercase().replace('-', "_")
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

fn parse_secs(var: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a number of seconds".to_string(),
        })
}

/// Apply prefixed variables from `lookup` to the loader.
pub(crate) fn apply_vars<F>(
    loader: &mut ConfigLoader,
    prefix: &str,
    lookup: F,
) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |suffix: &str| format!("{prefix}_{suffix}");

    if let Some(url) = lookup(&var("URL")) {
        loader.set_service_url(Some(url));
    }
    if let Some(auth_type) = lookup(&var("AUTH_TYPE")) {
        let parsed =
            auth_type
                .parse::<AuthType>()
                .map_err(|message| ConfigError::InvalidValue {
                    var: var("AUTH_TYPE"),
                    message,
                })?;
        loader.set_auth_type(Some(parsed));
    }
    if let Some(token) = lookup(&var("BEARER_TOKEN")) {
        loader.set_bearer_token(Some(SecretString::new(token.into())));
    }
    if let Some(username) = lookup(&var("USERNAME")) {
        loader.set_username(Some(username));
    }
    if let Some(password) = lookup(&var("PASSWORD")) {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(disable) = lookup(&var("DISABLE_SSL")) {
        loader.set_disable_ssl_verification(Some(parse_bool(&var("DISABLE_SSL"), &disable)?));
    }
    if let Some(timeout) = lookup(&var("TIMEOUT")) {
        loader.set_timeout(Some(parse_secs(&var("TIMEOUT"), &timeout)?));
    }
    if let Some(enabled) = lookup(&var("ENABLE_RETRIES")) {
        loader.set_enable_retries(Some(parse_bool(&var("ENABLE_RETRIES"), &enabled)?));
    }
    if let Some(retries) = lookup(&var("MAX_RETRIES")) {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: var("MAX_RETRIES"),
            message: "must be a non-negative integer".to_string(),
        })?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }
    if let Some(interval) = lookup(&var("RETRY_INTERVAL")) {
        loader.set_max_retry_interval(Some(parse_secs(&var("RETRY_INTERVAL"), &interval)?));
    }

    Ok(())
}

/// Apply process environment variables to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let prefix = env_prefix(loader.service_name());
    apply_vars(loader, &prefix, env_var_or_none)
}
