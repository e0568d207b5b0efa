//! Service provider models and request options.
//!
//! A service provider's `credentials` are decoded using its `service_type`
//! as the discriminator (see [`MlCredentials::for_service_type`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{JsonPatchOperation, Resource, Status};
use super::credentials::MlCredentials;
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

/// Service provider entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawServiceProviderEntity")]
pub struct ServiceProviderResponseEntity {
    pub name: String,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<MlCredentials>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Deserialize)]
struct RawServiceProviderEntity {
    name: String,
    service_type: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instance_id: Option<String>,
    #[serde(default)]
    credentials: Option<Map<String, Value>>,
    #[serde(default)]
    request_headers: Option<Map<String, Value>>,
    #[serde(default)]
    operational_space_id: Option<String>,
    #[serde(default)]
    deployment_space_id: Option<String>,
    #[serde(default)]
    integrated_project_id: Option<String>,
    #[serde(default)]
    group_ids: Option<Vec<String>>,
    #[serde(default)]
    user_ids: Option<Vec<String>>,
    #[serde(default)]
    status: Option<Status>,
}

impl TryFrom<RawServiceProviderEntity> for ServiceProviderResponseEntity {
    type Error = serde_json::Error;

    fn try_from(raw: RawServiceProviderEntity) -> std::result::Result<Self, Self::Error> {
        let credentials = raw
            .credentials
            .map(|map| MlCredentials::for_service_type(&raw.service_type, map))
            .transpose()?;

        Ok(Self {
            name: raw.name,
            service_type: raw.service_type,
            description: raw.description,
            instance_id: raw.instance_id,
            credentials,
            request_headers: raw.request_headers,
            operational_space_id: raw.operational_space_id,
            deployment_space_id: raw.deployment_space_id,
            integrated_project_id: raw.integrated_project_id,
            group_ids: raw.group_ids,
            user_ids: raw.user_ids,
            status: raw.status,
        })
    }
}

pub type ServiceProviderResponse = Resource<ServiceProviderResponseEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProviderResponseCollection {
    pub service_providers: Vec<ServiceProviderResponse>,
}

/// Options for `list_service_providers`.
#[derive(Debug, Clone, Default)]
pub struct ListServiceProvidersOptions {
    pub show_deleted: Option<bool>,
    pub service_type: Option<String>,
    pub instance_id: Option<String>,
    pub operational_space_id: Option<String>,
    pub deployment_space_id: Option<String>,
    pub integrated_project_id: Option<String>,
    pub headers: Option<Headers>,
}

impl ListServiceProvidersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListServiceProvidersOptions {
    show_deleted: bool,
    service_type: String,
    instance_id: String,
    operational_space_id: String,
    deployment_space_id: String,
    integrated_project_id: String,
});

/// Options for `add_service_provider`; the serialized form is the request body.
#[derive(Debug, Clone, Serialize)]
pub struct AddServiceProviderOptions {
    pub name: String,
    pub service_type: String,
    pub credentials: MlCredentials,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operational_space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrated_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddServiceProviderOptions {
    pub fn new(
        name: impl Into<String>,
        service_type: impl Into<String>,
        credentials: MlCredentials,
    ) -> Self {
        Self {
            name: name.into(),
            service_type: service_type.into(),
            credentials,
            description: None,
            instance_id: None,
            request_headers: None,
            operational_space_id: None,
            deployment_space_id: None,
            integrated_project_id: None,
            group_ids: None,
            user_ids: None,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("service_type", &self.service_type)
    }
}

option_setters!(AddServiceProviderOptions {
    description: String,
    instance_id: String,
    request_headers: Map<String, Value>,
    operational_space_id: String,
    deployment_space_id: String,
    integrated_project_id: String,
    group_ids: Vec<String>,
    user_ids: Vec<String>,
});

/// Options for `get_service_provider`.
#[derive(Debug, Clone, Default)]
pub struct GetServiceProviderOptions {
    pub service_provider_id: String,
    pub headers: Option<Headers>,
}

impl GetServiceProviderOptions {
    pub fn new(service_provider_id: impl Into<String>) -> Self {
        Self {
            service_provider_id: service_provider_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("service_provider_id", &self.service_provider_id)
    }
}

option_setters!(GetServiceProviderOptions {});

/// Options for `patch_service_provider`.
#[derive(Debug, Clone, Default)]
pub struct PatchServiceProviderOptions {
    pub service_provider_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchServiceProviderOptions {
    pub fn new(
        service_provider_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            service_provider_id: service_provider_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("service_provider_id", &self.service_provider_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchServiceProviderOptions {});

/// Options for `delete_service_provider`.
#[derive(Debug, Clone, Default)]
pub struct DeleteServiceProviderOptions {
    pub service_provider_id: String,
    pub force: Option<bool>,
    pub headers: Option<Headers>,
}

impl DeleteServiceProviderOptions {
    pub fn new(service_provider_id: impl Into<String>) -> Self {
        Self {
            service_provider_id: service_provider_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("service_provider_id", &self.service_provider_id)
    }
}

option_setters!(DeleteServiceProviderOptions { force: bool });
