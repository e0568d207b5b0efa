//! Error types for the OpenScale client.
//!
//! Responsibilities:
//! - Define the client error taxonomy (validation, build, transport).
//! - Classify errors for retry and metrics decisions.
//!
//! Invariants:
//! - Validation and build errors are produced before any network I/O.
//! - `ApiError` never carries request headers or credentials.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during OpenScale client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A required option was missing or empty.
    #[error("Invalid options: {0}")]
    Validation(String),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    RequestBody(#[source] serde_json::Error),

    /// Authentication is missing or was rejected.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-2xx response from the service.
    #[error("API error ({status}) at {url}: {message}{}", .trace.as_ref().map(|t| format!(" [Trace: {t}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        code: Option<String>,
        trace: Option<String>,
        errors: Vec<crate::models::ErrorItem>,
    },

    /// The response body did not match the declared result type.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Client configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] openscale_config::ConfigError),

    /// Maximum retries exceeded; carries the last error.
    #[error("Maximum retries exceeded ({0} attempts): {1}")]
    MaxRetriesExceeded(usize, Box<ClientError>),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::Timeout(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    ///
    /// Non-retryable status codes (fail immediately):
    /// - 400, 401, 403, 404: Client errors
    /// - 500: Internal Server Error (typically indicates a bug, not transient)
    /// - 501: Not Implemented
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            Self::MaxRetriesExceeded(_, inner) => inner.is_auth_error(),
            _ => false,
        }
    }

    /// HTTP status carried by this error, if the service responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::MaxRetriesExceeded(_, inner) => inner.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://example.com/v2/data_marts".to_string(),
            message: "failure".to_string(),
            code: None,
            trace: None,
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_error_is_retryable() {
        let err = ClientError::Timeout(Duration::from_secs(1));
        assert!(err.is_retryable());

        assert!(api_error(503).is_retryable());
        assert!(!api_error(500).is_retryable());

        let err = ClientError::Validation("data_mart_id must be provided".to_string());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("test".to_string()).is_auth_error());
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(!api_error(404).is_auth_error());

        let wrapped = ClientError::MaxRetriesExceeded(3, Box::new(api_error(401)));
        assert!(wrapped.is_auth_error());
    }

    #[test]
    fn test_is_retryable_status_retryable() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));
    }

    #[test]
    fn test_is_retryable_status_not_retryable() {
        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(403));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(501));
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_status_unwraps_retries() {
        let err = ClientError::MaxRetriesExceeded(4, Box::new(api_error(429)));
        assert_eq!(err.status(), Some(429));
        assert_eq!(ClientError::Validation("x".to_string()).status(), None);
    }

    #[test]
    fn test_api_error_display_includes_trace() {
        let err = ClientError::ApiError {
            status: 404,
            url: "u".to_string(),
            message: "Data mart not found".to_string(),
            code: Some("AIQDM0011E".to_string()),
            trace: Some("abc123".to_string()),
            errors: Vec::new(),
        };
        assert_eq!(
            err.to_string(),
            "API error (404) at u: Data mart not found [Trace: abc123]"
        );
    }
}
