//! Integrated system models and request options.
//!
//! Integrated systems describe external services (OpenPages, Slack, generic
//! HTTP hooks) that OpenScale pushes results to.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{JsonPatchOperation, Resource};
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedSystemEntity {
    pub name: String,
    #[serde(rename = "type")]
    pub system_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
}

pub type IntegratedSystemResponse = Resource<IntegratedSystemEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegratedSystemCollection {
    pub integrated_systems: Vec<IntegratedSystemResponse>,
}

/// Options for `list_integrated_systems`.
#[derive(Debug, Clone, Default)]
pub struct ListIntegratedSystemsOptions {
    /// System types to include; sent comma-joined.
    pub system_type: Option<Vec<String>>,
    pub headers: Option<Headers>,
}

impl ListIntegratedSystemsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListIntegratedSystemsOptions { system_type: Vec<String> });

/// Options for `add_integrated_system`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddIntegratedSystemOptions {
    pub name: String,
    #[serde(rename = "type")]
    pub system_type: String,
    pub description: String,
    pub credentials: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddIntegratedSystemOptions {
    pub fn new(
        name: impl Into<String>,
        system_type: impl Into<String>,
        description: impl Into<String>,
        credentials: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            system_type: system_type.into(),
            description: description.into(),
            credentials,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("type", &self.system_type)?;
        require("description", &self.description)
    }
}

option_setters!(AddIntegratedSystemOptions {
    connection: Value,
    parameters: Map<String, Value>,
    group_ids: Vec<String>,
    user_ids: Vec<String>,
});

/// Options for `get_integrated_system`.
#[derive(Debug, Clone, Default)]
pub struct GetIntegratedSystemOptions {
    pub integrated_system_id: String,
    pub headers: Option<Headers>,
}

impl GetIntegratedSystemOptions {
    pub fn new(integrated_system_id: impl Into<String>) -> Self {
        Self {
            integrated_system_id: integrated_system_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("integrated_system_id", &self.integrated_system_id)
    }
}

option_setters!(GetIntegratedSystemOptions {});

/// Options for `patch_integrated_system`.
#[derive(Debug, Clone, Default)]
pub struct PatchIntegratedSystemOptions {
    pub integrated_system_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchIntegratedSystemOptions {
    pub fn new(
        integrated_system_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            integrated_system_id: integrated_system_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("integrated_system_id", &self.integrated_system_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchIntegratedSystemOptions {});

/// Options for `delete_integrated_system`.
#[derive(Debug, Clone, Default)]
pub struct DeleteIntegratedSystemOptions {
    pub integrated_system_id: String,
    pub headers: Option<Headers>,
}

impl DeleteIntegratedSystemOptions {
    pub fn new(integrated_system_id: impl Into<String>) -> Self {
        Self {
            integrated_system_id: integrated_system_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("integrated_system_id", &self.integrated_system_id)
    }
}

option_setters!(DeleteIntegratedSystemOptions {});
