//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from credentials files, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Variable parsing (delegated to env.rs).
//! - Credentials file discovery (delegated to credentials_file.rs).
//!
//! Invariants / Assumptions:
//! - Sources are applied in call order; later values override earlier ones.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Without an explicit auth type, a bearer token wins over username/password.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

use super::credentials_file::{CredentialsSource, read_credentials_file, resolve_credentials_file};
use super::env::{apply_env, apply_vars, env_prefix};
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_MAX_RETRY_INTERVAL_SECS, DEFAULT_SERVICE_NAME,
    DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, AuthType, Config, ConnectionConfig, RetryConfig};

/// Configuration loader that builds config from credentials files, environment and code.
pub struct ConfigLoader {
    service_name: String,
    service_url: Option<String>,
    auth_type: Option<AuthType>,
    bearer_token: Option<SecretString>,
    username: Option<String>,
    password: Option<SecretString>,
    disable_ssl_verification: Option<bool>,
    timeout: Option<Duration>,
    enable_retries: Option<bool>,
    max_retries: Option<usize>,
    max_retry_interval: Option<Duration>,
    credentials_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader for the default service name.
    pub fn new() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_url: None,
            auth_type: None,
            bearer_token: None,
            username: None,
            password: None,
            disable_ssl_verification: None,
            timeout: None,
            enable_retries: None,
            max_retries: None,
            max_retry_interval: None,
            credentials_file: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    pub(crate) fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// or cannot be read. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the service name, which determines the variable prefix.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Read from this credentials file instead of searching for one.
    pub fn with_credentials_file(mut self, path: PathBuf) -> Self {
        self.credentials_file = Some(path);
        self
    }

    /// Read prefixed values from the credentials file, if one is found.
    ///
    /// A file named explicitly must exist; discovered locations are optional.
    pub fn from_credentials_file(mut self) -> Result<Self, ConfigError> {
        let Some(source) = resolve_credentials_file(self.credentials_file.as_deref()) else {
            return Ok(self);
        };
        let path = match source {
            CredentialsSource::Explicit(path) | CredentialsSource::Discovered(path) => path,
        };

        let vars = read_credentials_file(&path)?;
        let prefix = env_prefix(&self.service_name);
        apply_vars(&mut self, &prefix, |key| vars.get(key).cloned())?;
        Ok(self)
    }

    /// Read configuration from prefixed environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the service URL.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Force a specific auth type instead of inferring it.
    pub fn with_auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = Some(auth_type);
        self
    }

    /// Set the bearer token.
    pub fn with_bearer_token(mut self, token: String) -> Self {
        self.bearer_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set the basic-auth username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the basic-auth password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = Some(disable);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable retries with the given attempt count and interval cap.
    pub fn with_retries(mut self, max_retries: usize, max_retry_interval: Duration) -> Self {
        self.enable_retries = Some(true);
        self.max_retries = Some(max_retries);
        self.max_retry_interval = Some(max_retry_interval);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let service_url = validate_and_normalize_service_url(
            self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL),
        )?;

        let auth_type = match self.auth_type {
            Some(explicit) => explicit,
            None if self.bearer_token.is_some() => AuthType::BearerToken,
            None if self.username.is_some() && self.password.is_some() => AuthType::Basic,
            None => return Err(ConfigError::MissingAuth),
        };

        let strategy = match auth_type {
            AuthType::BearerToken => AuthStrategy::BearerToken {
                token: self.bearer_token.ok_or(ConfigError::MissingCredential {
                    auth_type: AuthType::BearerToken.as_str(),
                    field: "BEARER_TOKEN",
                })?,
            },
            AuthType::Basic => {
                let username = self.username.ok_or(ConfigError::MissingCredential {
                    auth_type: AuthType::Basic.as_str(),
                    field: "USERNAME",
                })?;
                let password = self.password.ok_or(ConfigError::MissingCredential {
                    auth_type: AuthType::Basic.as_str(),
                    field: "PASSWORD",
                })?;
                validate_basic_credential("username", &username)?;
                validate_basic_credential("password", password.expose_secret())?;
                AuthStrategy::Basic { username, password }
            }
            AuthType::NoAuth => AuthStrategy::NoAuth,
        };

        let retries = if self.enable_retries.unwrap_or(false) {
            let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
            if max_retries > MAX_MAX_RETRIES {
                return Err(ConfigError::InvalidMaxRetries {
                    message: format!(
                        "must be between 0 and {} (got {})",
                        MAX_MAX_RETRIES, max_retries
                    ),
                });
            }
            Some(RetryConfig {
                max_retries,
                max_retry_interval: self
                    .max_retry_interval
                    .unwrap_or(Duration::from_secs(DEFAULT_MAX_RETRY_INTERVAL_SECS)),
            })
        } else {
            None
        };

        let connection = ConnectionConfig {
            service_url,
            disable_ssl_verification: self.disable_ssl_verification.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            retries,
        };

        Self::validate_timeout_config(&connection)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
        })
    }

    /// Validates the request timeout is within `1..=MAX_TIMEOUT_SECS` seconds.
    fn validate_timeout_config(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn service_name(&self) -> &str {
        &self.service_name
    }

    pub(crate) fn set_service_url(&mut self, url: Option<String>) {
        self.service_url = url;
    }

    pub(crate) fn set_auth_type(&mut self, auth_type: Option<AuthType>) {
        self.auth_type = auth_type;
    }

    pub(crate) fn set_bearer_token(&mut self, token: Option<SecretString>) {
        self.bearer_token = token;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_disable_ssl_verification(&mut self, disable: Option<bool>) {
        self.disable_ssl_verification = disable;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_enable_retries(&mut self, enabled: Option<bool>) {
        self.enable_retries = enabled;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_max_retry_interval(&mut self, interval: Option<Duration>) {
        self.max_retry_interval = interval;
    }
}

/// Basic-auth values must be non-empty and free of `{`, `}` and `"`.
fn validate_basic_credential(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidCredential {
            message: format!("{field} must not be empty"),
        });
    }
    if value.contains(['{', '}', '"']) {
        return Err(ConfigError::InvalidCredential {
            message: format!("{field} must not contain curly brackets or quotation marks"),
        });
    }
    Ok(())
}

fn validate_and_normalize_service_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "service_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. {DEFAULT_SERVICE_URL}): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "service_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "service_url".into(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
