//! Centralized constants for the OpenScale SDK workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Service Identity
// =============================================================================

/// Default service name; also the source of the environment variable prefix.
pub const DEFAULT_SERVICE_NAME: &str = "watson_openscale";

/// Default service URL used when no URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://api.aiopenscale.cloud.ibm.com";

/// Service version reported in the SDK analytics header.
pub const SERVICE_VERSION: &str = "V2";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Retry Defaults
// =============================================================================

/// Default maximum number of retries once retries are enabled.
pub const DEFAULT_MAX_RETRIES: usize = 4;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default cap on the delay between two retry attempts, in seconds.
pub const DEFAULT_MAX_RETRY_INTERVAL_SECS: u64 = 30;

// =============================================================================
// Credentials File
// =============================================================================

/// Environment variable naming an explicit credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// File name searched for in the working and home directories.
pub const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";
