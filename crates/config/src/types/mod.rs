//! Configuration type definitions for the OpenScale client.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connection settings.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
pub(crate) mod connection;

pub use auth::{AuthConfig, AuthStrategy, AuthType};
pub use connection::{Config, ConnectionConfig, RetryConfig};
