//! Business application models and request options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{JsonPatchOperation, Resource, Status};
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessApplicationResponseEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub payload_fields: Vec<Value>,
    #[serde(default)]
    pub business_metrics: Vec<Value>,
    #[serde(default)]
    pub subscription_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_payload_data_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_batches_data_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_monitor_instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_metrics_monitor_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_metrics_monitor_instance_id: Option<String>,
    #[serde(default)]
    pub status: Status,
}

pub type BusinessApplicationResponse = Resource<BusinessApplicationResponseEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessApplicationsCollection {
    pub business_applications: Vec<BusinessApplicationResponse>,
}

/// Options for `list_business_applications`.
#[derive(Debug, Clone, Default)]
pub struct ListBusinessApplicationsOptions {
    pub headers: Option<Headers>,
}

impl ListBusinessApplicationsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListBusinessApplicationsOptions {});

/// Options for `add_business_application`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddBusinessApplicationOptions {
    pub name: String,
    pub description: String,
    pub payload_fields: Vec<Value>,
    pub business_metrics: Vec<Value>,
    pub subscription_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_metrics_monitor_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_payload_data_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_batches_data_set_id: Option<String>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddBusinessApplicationOptions {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        payload_fields: Vec<Value>,
        business_metrics: Vec<Value>,
        subscription_ids: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            payload_fields,
            business_metrics,
            subscription_ids,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        require_items("payload_fields", &self.payload_fields)?;
        require_items("business_metrics", &self.business_metrics)
    }
}

option_setters!(AddBusinessApplicationOptions {
    business_metrics_monitor_definition_id: String,
    business_payload_data_set_id: String,
    transaction_batches_data_set_id: String,
});

/// Options for `get_business_application`.
#[derive(Debug, Clone, Default)]
pub struct GetBusinessApplicationOptions {
    pub application_id: String,
    pub headers: Option<Headers>,
}

impl GetBusinessApplicationOptions {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("application_id", &self.application_id)
    }
}

option_setters!(GetBusinessApplicationOptions {});

/// Options for `patch_business_application`.
#[derive(Debug, Clone, Default)]
pub struct PatchBusinessApplicationOptions {
    pub application_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchBusinessApplicationOptions {
    pub fn new(application_id: impl Into<String>, json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            application_id: application_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("application_id", &self.application_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchBusinessApplicationOptions {});

/// Options for `delete_business_application`.
#[derive(Debug, Clone, Default)]
pub struct DeleteBusinessApplicationOptions {
    pub application_id: String,
    pub headers: Option<Headers>,
}

impl DeleteBusinessApplicationOptions {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("application_id", &self.application_id)
    }
}

option_setters!(DeleteBusinessApplicationOptions {});
