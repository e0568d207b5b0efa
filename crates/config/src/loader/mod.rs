//! Configuration loader for environment variables and credentials files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and
//!   dotenv-format credentials files.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk.
//! - Attaching credentials to HTTP requests (see client crate).
//!
//! Invariants / Assumptions:
//! - Sources are applied in call order; a later source overrides an earlier one.
//! - Every variable name carries the service prefix (`WATSON_OPENSCALE_` by default).
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod credentials_file;
mod env;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{env_prefix, env_var_or_none};
pub use error::ConfigError;
