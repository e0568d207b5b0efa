//! Metrics collection for API call performance.
//!
//! This module provides metrics collection for OpenScale API calls, including:
//! - Request latency histograms
//! - Request counters (total, retries, errors)
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a `metrics` recorder in the application)
//! - Persistent storage of metrics
//!
//! # Invariants
//! - All metrics use consistent label names: `operation`, `method`, `status`, `error_category`
//! - The `operation` label is the operation id (e.g. `get_data_mart`), never a raw path,
//!   so resource ids do not create unbounded label cardinality
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "openscale_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "openscale_api_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "openscale_api_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "openscale_api_errors_total";

/// Metric name for response decode failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "openscale_api_deserialization_failures_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Options rejected before any I/O.
    Validation,
    /// Transport-level errors (connection refused, DNS, etc.)
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Response body did not decode
    Decode,
    /// Request timeout
    Timeout,
    /// Unknown/unclassified errors
    Unknown,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Validation(_)
            | ClientError::InvalidUrl(_)
            | ClientError::RequestBody(_)
            | ClientError::Config(_) => ErrorCategory::Validation,
            ClientError::Timeout(_) => ErrorCategory::Timeout,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::ApiError { status, .. } => {
                if (400..500).contains(status) {
                    ErrorCategory::Http4xx
                } else if (500..600).contains(status) {
                    ErrorCategory::Http5xx
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::HttpError(e) => {
                if e.is_timeout() {
                    ErrorCategory::Timeout
                } else if e.is_connect() || e.is_request() {
                    ErrorCategory::Transport
                } else if e.is_decode() {
                    ErrorCategory::Decode
                } else {
                    ErrorCategory::Unknown
                }
            }
            ClientError::MaxRetriesExceeded(_, inner) => ErrorCategory::from(inner.as_ref()),
            ClientError::AuthFailed(_) => ErrorCategory::Http4xx,
        }
    }
}

/// Metrics collector for OpenScale API calls.
///
/// A lightweight wrapper around the `metrics` crate macros that keeps
/// label names consistent across every operation.
///
/// # Example
///
/// ```rust,ignore
/// use openscale_client::metrics::MetricsCollector;
///
/// let collector = MetricsCollector::new();
/// collector.record_request_duration("list_data_marts", "GET", Duration::from_millis(150), Some(200));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create a new, enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a disabled metrics collector.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if metrics collection is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before a response arrived.
    pub fn record_request_duration(
        &self,
        operation: &'static str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "operation" => operation,
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, operation: &'static str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "operation" => operation,
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record a retry attempt (1-based, excluding the initial request).
    pub fn record_retry(&self, operation: &'static str, method: &str, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "operation" => operation,
            "method" => method.to_string(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    /// Record an error.
    pub fn record_error(&self, operation: &'static str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "operation" => operation,
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, operation: &'static str, method: &str, error: &ClientError) {
        self.record_error(operation, method, ErrorCategory::from(error));
    }

    /// Record a response body that failed to decode into `model_type`.
    pub fn record_deserialization_failure(&self, operation: &'static str, model_type: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "operation" => operation,
            "model_type" => model_type,
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_as_str() {
        assert_eq!(ErrorCategory::Validation.as_str(), "validation");
        assert_eq!(ErrorCategory::Transport.as_str(), "transport");
        assert_eq!(ErrorCategory::Http4xx.as_str(), "http_4xx");
        assert_eq!(ErrorCategory::Http5xx.as_str(), "http_5xx");
        assert_eq!(ErrorCategory::Decode.as_str(), "decode");
        assert_eq!(ErrorCategory::Timeout.as_str(), "timeout");
        assert_eq!(ErrorCategory::Unknown.as_str(), "unknown");
    }

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "test".to_string(),
            message: "failure".to_string(),
            code: None,
            trace: None,
            errors: Vec::new(),
        }
    }

    #[test]
    fn test_error_categorization() {
        let timeout_err = ClientError::Timeout(Duration::from_secs(1));
        assert_eq!(ErrorCategory::from(&timeout_err), ErrorCategory::Timeout);

        let validation = ClientError::Validation("missing".to_string());
        assert_eq!(ErrorCategory::from(&validation), ErrorCategory::Validation);

        assert_eq!(ErrorCategory::from(&api_error(400)), ErrorCategory::Http4xx);
        assert_eq!(ErrorCategory::from(&api_error(503)), ErrorCategory::Http5xx);
        assert_eq!(ErrorCategory::from(&api_error(302)), ErrorCategory::Unknown);

        let decode = ClientError::InvalidResponse("bad".to_string());
        assert_eq!(ErrorCategory::from(&decode), ErrorCategory::Decode);
    }

    #[test]
    fn test_max_retries_exceeded_categorization() {
        let outer = ClientError::MaxRetriesExceeded(3, Box::new(api_error(503)));
        assert_eq!(ErrorCategory::from(&outer), ErrorCategory::Http5xx);
    }

    #[test]
    fn test_metrics_collector_enabled() {
        assert!(MetricsCollector::new().is_enabled());
        assert!(!MetricsCollector::disabled().is_enabled());
        assert!(!MetricsCollector::default().is_enabled());
    }
}
