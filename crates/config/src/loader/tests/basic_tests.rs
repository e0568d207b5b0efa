//! Basic builder tests for the configuration loader.

use crate::constants::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::{AuthStrategy, AuthType};
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_bearer_token_builder() {
    let config = ConfigLoader::new()
        .with_service_url("https://openscale.example.com".to_string())
        .with_bearer_token("token-123".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.service_url, "https://openscale.example.com");
    match config.auth.strategy {
        AuthStrategy::BearerToken { token } => assert_eq!(token.expose_secret(), "token-123"),
        other => panic!("Expected bearer token, got {:?}", other.auth_type()),
    }
}

#[test]
fn test_basic_auth_builder() {
    let config = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::Basic { username, password } => {
            assert_eq!(username, "admin");
            assert_eq!(password.expose_secret(), "secret");
        }
        other => panic!("Expected basic auth, got {:?}", other.auth_type()),
    }
}

#[test]
fn test_bearer_token_preferred_when_both_present() {
    let config = ConfigLoader::new()
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_bearer_token("token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.auth.strategy.auth_type(), AuthType::BearerToken);
}

#[test]
fn test_defaults_applied() {
    let config = ConfigLoader::new()
        .with_auth_type(AuthType::NoAuth)
        .build()
        .unwrap();

    assert_eq!(config.connection.service_url, DEFAULT_SERVICE_URL);
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert!(!config.connection.disable_ssl_verification);
    assert!(config.connection.retries.is_none());
}

#[test]
fn test_missing_auth_is_error() {
    let result = ConfigLoader::new().build();
    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_explicit_auth_type_requires_credential() {
    let result = ConfigLoader::new()
        .with_auth_type(AuthType::Basic)
        .with_username("admin".to_string())
        .build();

    assert!(matches!(
        result,
        Err(ConfigError::MissingCredential { field: "PASSWORD", .. })
    ));
}

#[test]
fn test_retries_enabled_with_builder() {
    let config = ConfigLoader::new()
        .with_auth_type(AuthType::NoAuth)
        .with_retries(2, Duration::from_secs(5))
        .build()
        .unwrap();

    let retries = config.connection.retries.unwrap();
    assert_eq!(retries.max_retries, 2);
    assert_eq!(retries.max_retry_interval, Duration::from_secs(5));
}

#[test]
fn test_trailing_slash_trimmed() {
    let config = ConfigLoader::new()
        .with_service_url("https://openscale.example.com/".to_string())
        .with_auth_type(AuthType::NoAuth)
        .build()
        .unwrap();

    assert_eq!(config.connection.service_url, "https://openscale.example.com");
}

#[test]
fn test_service_url_path_preserved() {
    let config = ConfigLoader::new()
        .with_service_url("https://cpd.example.com/openscale/instance-1/".to_string())
        .with_auth_type(AuthType::NoAuth)
        .build()
        .unwrap();

    assert_eq!(
        config.connection.service_url,
        "https://cpd.example.com/openscale/instance-1"
    );
}
