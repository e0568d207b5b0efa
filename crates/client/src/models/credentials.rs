//! Credential models for machine learning providers, scoring endpoints and
//! data mart storage.
//!
//! Responsibilities:
//! - Decode provider credentials, which carry no explicit tag, into the
//!   matching variant.
//! - Preserve unrecognized credential members for lossless round trips.
//!
//! Invariants:
//! - Structural decode order for [`MlCredentials`] is SageMaker, Azure,
//!   WML on Cloud Pak for Data, custom, WML on cloud, SPSS, then unknown.
//!   `auth_type` only appears on custom credentials, so it is matched
//!   ahead of the `url`-based shapes.
//! - When a service type is known (service provider entities), it selects
//!   the variant directly and missing required members are a decode error.
//! - Serializing a variant yields its typed members merged with `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::ExtraFields;
use super::union::{ShapeMatcher, decode_as, decode_by_shape};

/// Amazon SageMaker credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SageMakerCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Azure Machine Learning (studio or service) credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureCredentials {
    pub subscription_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub tenant: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Watson Machine Learning on Cloud Pak for Data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmlCp4dCredentials {
    pub wml_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Watson Machine Learning on IBM Cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmlCloudCredentials {
    pub url: String,
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// SPSS Collaboration and Deployment Services credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpssCredentials {
    pub url: String,
    pub username: String,
    pub password: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Credentials for a custom machine learning engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomCredentials {
    pub auth_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apikey: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_provider: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Machine learning provider credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MlCredentials {
    SageMaker(SageMakerCredentials),
    Azure(AzureCredentials),
    WmlCp4d(WmlCp4dCredentials),
    WmlCloud(WmlCloudCredentials),
    Spss(SpssCredentials),
    Custom(CustomCredentials),
    /// No known shape matched; every member is kept verbatim.
    Unknown(Map<String, Value>),
}

const ML_CREDENTIAL_SHAPES: &[ShapeMatcher<MlCredentials>] = &[
    ShapeMatcher {
        required: &["access_key_id", "secret_access_key"],
        decode: |m| decode_as(m).map(MlCredentials::SageMaker),
    },
    ShapeMatcher {
        required: &["subscription_id", "client_id", "client_secret", "tenant"],
        decode: |m| decode_as(m).map(MlCredentials::Azure),
    },
    ShapeMatcher {
        required: &["wml_location"],
        decode: |m| decode_as(m).map(MlCredentials::WmlCp4d),
    },
    ShapeMatcher {
        required: &["auth_type"],
        decode: |m| decode_as(m).map(MlCredentials::Custom),
    },
    ShapeMatcher {
        required: &["url", "instance_id"],
        decode: |m| decode_as(m).map(MlCredentials::WmlCloud),
    },
    ShapeMatcher {
        required: &["url", "username", "password"],
        decode: |m| decode_as(m).map(MlCredentials::Spss),
    },
];

impl MlCredentials {
    /// Decode by structural matching in the documented priority order.
    pub fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        decode_by_shape(map, ML_CREDENTIAL_SHAPES, MlCredentials::Unknown)
    }

    /// Decode using the owning provider's `service_type` as the tag.
    ///
    /// Unrecognized service types fall back to structural matching.
    pub fn for_service_type(
        service_type: &str,
        map: Map<String, Value>,
    ) -> Result<Self, serde_json::Error> {
        match service_type {
            "amazon_sagemaker" => decode_as(map).map(Self::SageMaker),
            "azure_machine_learning" | "azure_machine_learning_service" => {
                decode_as(map).map(Self::Azure)
            }
            "watson_machine_learning" if map.contains_key("wml_location") => {
                decode_as(map).map(Self::WmlCp4d)
            }
            "watson_machine_learning" => decode_as(map).map(Self::WmlCloud),
            "spss_collaboration_and_deployment_services" => decode_as(map).map(Self::Spss),
            "custom_machine_learning" if map.contains_key("auth_type") => {
                decode_as(map).map(Self::Custom)
            }
            _ => Self::from_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for MlCredentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        Self::from_map(map).map_err(serde::de::Error::custom)
    }
}

/// Azure scoring endpoint token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AzureScoringEndpointCredentials {
    pub token: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Credentials used by OpenScale to call a deployment's scoring endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoringEndpointCredentials {
    Azure(AzureScoringEndpointCredentials),
    Other(Map<String, Value>),
}

impl<'de> Deserialize<'de> for ScoringEndpointCredentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        decode_by_shape(
            map,
            &[ShapeMatcher {
                required: &["token"],
                decode: |m| decode_as(m).map(ScoringEndpointCredentials::Azure),
            }],
            ScoringEndpointCredentials::Other,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Connection string form of data mart storage credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStorageCredentialsShort {
    pub uri: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Discrete host/user/password form of data mart storage credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStorageCredentialsLong {
    pub hostname: String,
    pub username: String,
    pub password: String,
    pub db: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sslmode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_base64: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Data mart database credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrimaryStorageCredentials {
    Short(PrimaryStorageCredentialsShort),
    Long(PrimaryStorageCredentialsLong),
    Unknown(Map<String, Value>),
}

const PRIMARY_STORAGE_SHAPES: &[ShapeMatcher<PrimaryStorageCredentials>] = &[
    ShapeMatcher {
        required: &["uri"],
        decode: |m| decode_as(m).map(PrimaryStorageCredentials::Short),
    },
    ShapeMatcher {
        required: &["hostname", "username", "password", "db"],
        decode: |m| decode_as(m).map(PrimaryStorageCredentials::Long),
    },
];

impl<'de> Deserialize<'de> for PrimaryStorageCredentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        decode_by_shape(map, PRIMARY_STORAGE_SHAPES, PrimaryStorageCredentials::Unknown)
            .map_err(serde::de::Error::custom)
    }
}
