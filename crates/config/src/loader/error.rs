//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Errors NEVER include secret values or raw credentials-file lines.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Authentication configuration is required (bearer token, username/password, or auth type noAuth)"
    )]
    MissingAuth,

    #[error("Auth type {auth_type} requires {field}")]
    MissingCredential {
        auth_type: &'static str,
        field: &'static str,
    },

    #[error("Invalid credential: {message}")]
    InvalidCredential { message: String },

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    #[error("invalid max retries: {message}")]
    InvalidMaxRetries { message: String },

    #[error("Failed to read credentials file at {path}: {kind}")]
    CredentialsFileRead { path: PathBuf, kind: ErrorKind },

    /// SAFETY: only the byte index is reported, never the offending line.
    #[error("Failed to parse credentials file at {path} (position {error_index})")]
    CredentialsFileParse { path: PathBuf, error_index: usize },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
