//! Watson OpenScale client and its API methods.
//!
//! This module provides [`OpenScaleClient`], the entry point for every
//! remote operation. Methods are grouped by resource family in private
//! submodules and delegate to the free functions in [`crate::endpoints`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `data_marts`, `service_providers`, `subscriptions`: Catalogue resources
//! - `data_sets`, `records`: Data sets and their records
//! - `monitors`: Definitions, instances, runs and measurements
//! - `business_applications`, `integrated_systems`, `operational_spaces`
//! - `user_preferences`, `explanations`, `drift`
//!
//! # What this module does NOT handle:
//! - Request assembly and retries (delegated to [`crate::endpoints`])
//! - Configuration loading (delegated to `openscale_config`)
//!
//! # Invariants
//! - The client holds no per-call mutable state; it is `Send + Sync` and
//!   configuration mutators take `&mut self`.

pub mod builder;

mod business_applications;
mod data_marts;
mod data_sets;
mod drift;
mod explanations;
mod integrated_systems;
mod monitors;
mod operational_spaces;
mod records;
mod service_providers;
mod subscriptions;
mod user_preferences;

use std::time::Duration;

use openscale_config::ConfigLoader;

use crate::auth::AuthStrategy;
use crate::endpoints::RetryPolicy;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Headers;

/// Watson OpenScale v2 REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use openscale_client::{AuthStrategy, OpenScaleClient};
/// use secrecy::SecretString;
///
/// let client = OpenScaleClient::builder()
///     .service_url("https://api.aiopenscale.cloud.ibm.com/openscale/my-instance")
///     .auth_strategy(AuthStrategy::BearerToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
///
/// Or resolve everything from the environment and credentials file:
///
/// ```rust,ignore
/// let client = OpenScaleClient::from_env()?;
/// ```
#[derive(Debug)]
pub struct OpenScaleClient {
    pub(crate) http: reqwest::Client,
    pub(crate) service_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) default_headers: Headers,
    pub(crate) retry: Option<RetryPolicy>,
    pub(crate) metrics: Option<MetricsCollector>,
    pub(crate) timeout: Duration,
}

impl OpenScaleClient {
    /// Create a new client builder.
    pub fn builder() -> builder::OpenScaleClientBuilder {
        builder::OpenScaleClientBuilder::new()
    }

    /// Build a client from `.env`, the credentials file and the
    /// `WATSON_OPENSCALE_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when the configuration is missing or
    /// invalid.
    pub fn from_env() -> Result<Self> {
        let config = ConfigLoader::new()
            .load_dotenv()?
            .from_credentials_file()?
            .from_env()?
            .build()?;
        Self::builder().from_config(&config).build()
    }

    /// Base URL every route is appended to.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Replace the service URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] unless the URL is an absolute
    /// `http`/`https` URL.
    pub fn set_service_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.service_url = builder::OpenScaleClientBuilder::normalize_service_url(url.into())?;
        Ok(())
    }

    /// Headers sent with every request, below per-call headers.
    pub fn default_headers(&self) -> &Headers {
        &self.default_headers
    }

    pub fn set_default_headers(&mut self, headers: Headers) {
        self.default_headers = headers;
    }

    /// Retry transient failures up to `max_retries` times, waiting at most
    /// `max_retry_interval` between attempts.
    pub fn enable_retries(&mut self, max_retries: usize, max_retry_interval: Duration) {
        self.retry = Some(RetryPolicy::new(max_retries, max_retry_interval));
    }

    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    /// Current retry policy, if retries are enabled.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    /// Name of the configured authenticator.
    pub fn auth_type(&self) -> &'static str {
        self.auth.name()
    }
}
