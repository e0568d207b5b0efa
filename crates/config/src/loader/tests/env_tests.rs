//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test prefixed environment variable overrides for builder values.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test custom service names.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::{AuthStrategy, AuthType};
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

#[test]
#[serial]
fn test_env_overrides_builder_values() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WATSON_OPENSCALE_URL", Some("https://env.example.com")),
            ("WATSON_OPENSCALE_BEARER_TOKEN", Some("env-token")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_service_url("https://builder.example.com".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            // Env applied after builder value
            assert_eq!(config.connection.service_url, "https://env.example.com");
            match config.auth.strategy {
                AuthStrategy::BearerToken { token } => {
                    assert_eq!(token.expose_secret(), "env-token")
                }
                other => panic!("Expected bearer token, got {:?}", other.auth_type()),
            }
        },
    );
}

#[test]
#[serial]
fn test_builder_after_env_wins() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WATSON_OPENSCALE_URL", Some("https://env.example.com")),
            ("WATSON_OPENSCALE_AUTH_TYPE", Some("noAuth")),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_service_url("https://builder.example.com".to_string())
                .build()
                .unwrap();

            assert_eq!(config.connection.service_url, "https://builder.example.com");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WATSON_OPENSCALE_BEARER_TOKEN", Some("")),
            ("WATSON_OPENSCALE_USERNAME", Some("   ")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_username("admin".to_string())
                .with_password("password".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.auth.strategy.auth_type(), AuthType::Basic);
        },
    );
}

#[test]
#[serial]
fn test_retry_settings_from_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WATSON_OPENSCALE_AUTH_TYPE", Some("NOAUTH")),
            ("WATSON_OPENSCALE_ENABLE_RETRIES", Some("true")),
            ("WATSON_OPENSCALE_MAX_RETRIES", Some("3")),
            ("WATSON_OPENSCALE_RETRY_INTERVAL", Some("10")),
            ("WATSON_OPENSCALE_DISABLE_SSL", Some("TRUE")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert!(config.connection.disable_ssl_verification);
            let retries = config.connection.retries.unwrap();
            assert_eq!(retries.max_retries, 3);
            assert_eq!(retries.max_retry_interval, Duration::from_secs(10));
        },
    );
}

#[test]
#[serial]
fn test_retry_settings_ignored_without_enable_flag() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("WATSON_OPENSCALE_AUTH_TYPE", Some("noAuth")),
            ("WATSON_OPENSCALE_ENABLE_RETRIES", None),
            ("WATSON_OPENSCALE_MAX_RETRIES", Some("3")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(config.connection.retries.is_none());
        },
    );
}

#[test]
#[serial]
fn test_custom_service_name_prefix() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("MY_OPENSCALE_URL", Some("https://custom.example.com")),
            ("MY_OPENSCALE_AUTH_TYPE", Some("noAuth")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_service_name("my-openscale")
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.service_url, "https://custom.example.com");
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_names_variable() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("WATSON_OPENSCALE_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var, .. }) if var == "WATSON_OPENSCALE_TIMEOUT"
        ));
    });
}

#[test]
#[serial]
fn test_unknown_auth_type_rejected() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("WATSON_OPENSCALE_AUTH_TYPE", Some("iam"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    });
}
