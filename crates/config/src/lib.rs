//! Configuration management for the Watson OpenScale client.
//!
//! This crate provides types and loaders for resolving the service URL,
//! authenticator and transport settings from environment variables,
//! credentials files and explicit builder calls.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_prefix, env_var_or_none};
pub use types::{AuthConfig, AuthStrategy, AuthType, Config, ConnectionConfig, RetryConfig};
