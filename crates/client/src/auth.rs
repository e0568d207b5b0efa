//! Authentication strategies applied to outgoing requests.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with the OpenScale service.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Static bearer token (IAM access token or CP4D token).
    BearerToken { token: SecretString },
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// No authentication; for local or proxied deployments.
    NoAuth,
}

impl AuthStrategy {
    /// Attach credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::BearerToken { token } => builder.bearer_auth(token.expose_secret()),
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::NoAuth => builder,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BearerToken { .. } => "bearerToken",
            Self::Basic { .. } => "basic",
            Self::NoAuth => "noAuth",
        }
    }
}

impl From<&openscale_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &openscale_config::AuthStrategy) -> Self {
        match strategy {
            openscale_config::AuthStrategy::BearerToken { token } => Self::BearerToken {
                token: token.clone(),
            },
            openscale_config::AuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            openscale_config::AuthStrategy::NoAuth => Self::NoAuth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_header() {
        let strategy = AuthStrategy::BearerToken {
            token: SecretString::new("abc".to_string().into()),
        };
        let request = strategy
            .apply(reqwest::Client::new().get("http://localhost/v2/data_marts"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Bearer abc"
        );
    }

    #[test]
    fn test_basic_auth_header() {
        let strategy = AuthStrategy::Basic {
            username: "user".to_string(),
            password: SecretString::new("pass".to_string().into()),
        };
        let request = strategy
            .apply(reqwest::Client::new().get("http://localhost/v2/data_marts"))
            .build()
            .unwrap();
        // base64("user:pass")
        assert_eq!(
            request.headers().get("Authorization").unwrap(),
            "Basic dXNlcjpwYXNz"
        );
    }

    #[test]
    fn test_no_auth_leaves_request_untouched() {
        let request = AuthStrategy::NoAuth
            .apply(reqwest::Client::new().get("http://localhost/v2/data_marts"))
            .build()
            .unwrap();
        assert!(request.headers().get("Authorization").is_none());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let strategy = AuthStrategy::BearerToken {
            token: SecretString::new("super-secret".to_string().into()),
        };
        assert!(!format!("{strategy:?}").contains("super-secret"));
    }
}
