//! Operational space models and request options.

use serde::{Deserialize, Serialize};

use super::common::{JsonPatchOperation, Resource};
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSpaceEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

pub type OperationalSpaceResponse = Resource<OperationalSpaceEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalSpaceCollection {
    pub operational_spaces: Vec<OperationalSpaceResponse>,
}

/// Options for `list_operational_spaces`.
#[derive(Debug, Clone, Default)]
pub struct ListOperationalSpacesOptions {
    pub headers: Option<Headers>,
}

impl ListOperationalSpacesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListOperationalSpacesOptions {});

/// Options for `add_operational_space`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddOperationalSpaceOptions {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddOperationalSpaceOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)
    }
}

option_setters!(AddOperationalSpaceOptions { description: String });

/// Options for `get_operational_space`.
#[derive(Debug, Clone, Default)]
pub struct GetOperationalSpaceOptions {
    pub operational_space_id: String,
    pub headers: Option<Headers>,
}

impl GetOperationalSpaceOptions {
    pub fn new(operational_space_id: impl Into<String>) -> Self {
        Self {
            operational_space_id: operational_space_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("operational_space_id", &self.operational_space_id)
    }
}

option_setters!(GetOperationalSpaceOptions {});

/// Options for `update_operational_space` (JSON Patch).
#[derive(Debug, Clone, Default)]
pub struct UpdateOperationalSpaceOptions {
    pub operational_space_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl UpdateOperationalSpaceOptions {
    pub fn new(
        operational_space_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            operational_space_id: operational_space_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("operational_space_id", &self.operational_space_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(UpdateOperationalSpaceOptions {});

/// Options for `delete_operational_space`.
#[derive(Debug, Clone, Default)]
pub struct DeleteOperationalSpaceOptions {
    pub operational_space_id: String,
    pub headers: Option<Headers>,
}

impl DeleteOperationalSpaceOptions {
    pub fn new(operational_space_id: impl Into<String>) -> Self {
        Self {
            operational_space_id: operational_space_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("operational_space_id", &self.operational_space_id)
    }
}

option_setters!(DeleteOperationalSpaceOptions {});
