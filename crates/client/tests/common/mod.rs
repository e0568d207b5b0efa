//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the OpenScale client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here authenticate with the bearer token `test-token`

use std::time::Duration;

#[allow(unused_imports)]
pub use openscale_client::testing::{load_fixture, load_fixture_string};

#[allow(unused_imports)]
pub use openscale_client::{AuthStrategy, ClientError, OpenScaleClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Bearer token every test client sends.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-token";

/// Client pointed at the mock server, retries disabled.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> OpenScaleClient {
    OpenScaleClient::builder()
        .service_url(server.uri())
        .auth_strategy(AuthStrategy::BearerToken {
            token: SecretString::new(TEST_TOKEN.to_string().into()),
        })
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Client with retries enabled and no wait between attempts.
#[allow(dead_code)]
pub fn retrying_client(server: &MockServer, max_retries: usize) -> OpenScaleClient {
    let mut client = test_client(server);
    client.enable_retries(max_retries, Duration::ZERO);
    client
}

/// Route client logs to the test harness; honours `RUST_LOG`.
#[allow(dead_code)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Standard OpenScale error body.
#[allow(dead_code)]
pub fn error_body(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({
        "trace": "trace-123",
        "errors": [{"code": code, "message": message}]
    })
}
