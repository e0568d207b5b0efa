//! Watson OpenScale v2 REST API client.
//!
//! This crate provides a typed async client for the OpenScale service:
//! data marts, service providers, subscriptions, data sets and records,
//! monitors and measurements, explanations, drift archives and the
//! remaining administrative resources. Every operation takes an options
//! struct, validates it before any I/O, and returns a
//! [`DetailedResponse`] carrying the status, headers and decoded result.
//!
//! ```rust,ignore
//! use openscale_client::{GetDataMartOptions, OpenScaleClient};
//!
//! let client = OpenScaleClient::from_env()?;
//! let response = client.get_data_mart(&GetDataMartOptions::new("dm-123")).await?;
//! println!("{:?}", response.result.entity);
//! ```

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::OpenScaleClient;
pub use client::builder::OpenScaleClientBuilder;
pub use endpoints::{DetailedResponse, RetryPolicy};
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::*;
