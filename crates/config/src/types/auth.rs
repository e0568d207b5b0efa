//! Authentication types for OpenScale client configuration.
//!
//! Responsibilities:
//! - Define the supported authenticator kinds and their credentials.
//! - Parse the `*_AUTH_TYPE` configuration value.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//! - Token acquisition or refresh; bearer tokens are used as given.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Auth type names are matched case-insensitively.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authenticator kinds understood by the configuration loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthType {
    BearerToken,
    Basic,
    NoAuth,
}

impl AuthType {
    /// Canonical configuration spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BearerToken => "bearerToken",
            Self::Basic => "basic",
            Self::NoAuth => "noAuth",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearertoken" => Ok(Self::BearerToken),
            "basic" => Ok(Self::Basic),
            "noauth" => Ok(Self::NoAuth),
            other => Err(format!(
                "unsupported auth type '{other}' (expected bearerToken, basic or noAuth)"
            )),
        }
    }
}

/// Strategy for authenticating with the OpenScale service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// Pre-obtained bearer token sent as `Authorization: Bearer <token>`.
    #[serde(rename = "bearerToken")]
    BearerToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
    /// HTTP basic authentication.
    #[serde(rename = "basic")]
    Basic {
        username: String,
        #[serde(with = "secret_string")]
        password: SecretString,
    },
    /// No `Authorization` header at all.
    #[serde(rename = "noAuth")]
    NoAuth,
}

impl AuthStrategy {
    /// The [`AuthType`] this strategy belongs to.
    pub fn auth_type(&self) -> AuthType {
        match self {
            Self::BearerToken { .. } => AuthType::BearerToken,
            Self::Basic { .. } => AuthType::Basic,
            Self::NoAuth => AuthType::NoAuth,
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
