//! Client builder for constructing [`OpenScaleClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (service_url, auth_strategy)
//! - Normalizing the service URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`OpenScaleClient`] methods)
//! - Retry execution (handled by the request builder in [`crate::endpoints`])
//!
//! # Invariants
//! - `service_url` and `auth_strategy` must be provided before calling `build()`
//! - The service URL is always normalized to have no trailing slashes
//! - `disable_ssl_verification` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::OpenScaleClient;
use crate::endpoints::RetryPolicy;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Headers;
use openscale_config::{
    Config,
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`OpenScaleClient`].
///
/// All options have defaults except `service_url` and `auth_strategy`.
/// Retries are disabled unless [`enable_retries`](Self::enable_retries) is
/// called or the configuration enables them.
///
/// # Example
///
/// ```rust,ignore
/// use openscale_client::{AuthStrategy, OpenScaleClient};
/// use secrecy::SecretString;
/// use std::time::Duration;
///
/// let client = OpenScaleClient::builder()
///     .service_url("https://api.aiopenscale.cloud.ibm.com")
///     .auth_strategy(AuthStrategy::BearerToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .timeout(Duration::from_secs(120))
///     .enable_retries(4, Duration::from_secs(30))
///     .build()?;
/// ```
pub struct OpenScaleClientBuilder {
    service_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    disable_ssl_verification: bool,
    timeout: Duration,
    default_headers: Headers,
    retry: Option<RetryPolicy>,
    metrics: Option<MetricsCollector>,
}

impl Default for OpenScaleClientBuilder {
    fn default() -> Self {
        Self {
            service_url: None,
            auth_strategy: None,
            disable_ssl_verification: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Headers::new(),
            retry: None,
            metrics: None,
        }
    }
}

impl OpenScaleClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service URL, including any instance path prefix.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = Some(url.into());
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 60 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Headers sent with every request.
    pub fn default_headers(mut self, headers: Headers) -> Self {
        self.default_headers = headers;
        self
    }

    /// Retry 429/502/503/504 responses and connect/timeout failures.
    pub fn enable_retries(mut self, max_retries: usize, max_retry_interval: Duration) -> Self {
        self.retry = Some(RetryPolicy::new(max_retries, max_retry_interval));
        self
    }

    /// Set the metrics collector for per-operation request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use openscale_client::OpenScaleClient;
    /// use openscale_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().from_env()?.build()?;
    /// let client = OpenScaleClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.service_url = Some(config.connection.service_url.clone());
        self.auth_strategy = Some(AuthStrategy::from(&config.auth.strategy));
        self.disable_ssl_verification = config.connection.disable_ssl_verification;
        self.timeout = config.connection.timeout;
        self.retry = config.connection.retries.map(RetryPolicy::from);
        self
    }

    /// Check that a URL is absolute `http`/`https` and strip trailing slashes.
    ///
    /// - `"https://host/openscale/abc/"` -> `"https://host/openscale/abc"`
    /// - `"https://host//"` -> `"https://host"`
    pub(crate) fn normalize_service_url(url: String) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        let has_host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ClientError::InvalidUrl(format!(
                "service URL must be an absolute http(s) URL: {url}"
            )));
        }
        Ok(trimmed.to_string())
    }

    /// Build the [`OpenScaleClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `service_url` was not provided or is not http(s).
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<OpenScaleClient> {
        let service_url = self
            .service_url
            .ok_or_else(|| ClientError::InvalidUrl("service_url is required".to_string()))?;
        let service_url = Self::normalize_service_url(service_url)?;

        let auth = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.disable_ssl_verification {
            if service_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "disable_ssl_verification=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        tracing::debug!(
            service_url = %service_url,
            auth = auth.name(),
            retries = self.retry.is_some(),
            "Built OpenScale client"
        );

        Ok(OpenScaleClient {
            http,
            service_url,
            auth,
            default_headers: self.default_headers,
            retry: self.retry,
            metrics: self.metrics,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openscale_config::RetryConfig;
    use secrecy::SecretString;

    fn bearer() -> AuthStrategy {
        AuthStrategy::BearerToken {
            token: SecretString::new("test-token".to_string().into()),
        }
    }

    #[test]
    fn test_from_config_with_bearer_token() {
        let config = Config::with_bearer_token(
            "https://openscale.example.com".to_string(),
            SecretString::new("test-token".to_string().into()),
        );

        let client = OpenScaleClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.service_url(), "https://openscale.example.com");
        assert_eq!(client.auth_type(), "bearerToken");
        assert!(client.retry_policy().is_none());
    }

    #[test]
    fn test_from_config_with_basic_auth() {
        let config = Config::with_basic_auth(
            "https://openscale.example.com".to_string(),
            "admin".to_string(),
            SecretString::new("test-password".to_string().into()),
        );

        let client = OpenScaleClient::builder().from_config(&config).build().unwrap();

        assert_eq!(client.auth_type(), "basic");
    }

    #[test]
    fn test_from_config_preserves_settings() {
        let mut config = Config::without_auth("https://openscale.example.com".to_string());
        config.connection.disable_ssl_verification = true;
        config.connection.timeout = Duration::from_secs(120);
        config.connection.retries = Some(RetryConfig {
            max_retries: 2,
            max_retry_interval: Duration::from_secs(5),
        });

        let builder = OpenScaleClient::builder().from_config(&config);

        assert_eq!(
            builder.service_url,
            Some("https://openscale.example.com".to_string())
        );
        assert!(builder.disable_ssl_verification);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(
            builder.retry,
            Some(RetryPolicy::new(2, Duration::from_secs(5)))
        );
    }

    #[test]
    fn test_build_missing_service_url() {
        let err = OpenScaleClient::builder()
            .auth_strategy(bearer())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_missing_auth_strategy() {
        let err = OpenScaleClient::builder()
            .service_url("https://openscale.example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_normalize_service_url_trailing_slash() {
        let url = OpenScaleClientBuilder::normalize_service_url(
            "https://openscale.example.com/openscale/abc/".to_string(),
        )
        .unwrap();
        assert_eq!(url, "https://openscale.example.com/openscale/abc");
    }

    #[test]
    fn test_normalize_service_url_multiple_trailing_slashes() {
        let url =
            OpenScaleClientBuilder::normalize_service_url("https://example.com//".to_string())
                .unwrap();
        assert_eq!(url, "https://example.com");
    }

    #[test]
    fn test_normalize_service_url_rejects_other_schemes() {
        for url in ["ftp://example.com", "example.com", "https://", ""] {
            assert!(
                OpenScaleClientBuilder::normalize_service_url(url.to_string()).is_err(),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_disable_ssl_verification_with_http_url() {
        let client = OpenScaleClient::builder()
            .service_url("http://localhost:9443")
            .auth_strategy(AuthStrategy::NoAuth)
            .disable_ssl_verification(true)
            .build();

        assert!(client.is_ok());
    }
}
