//! Data mart models and request options.

use serde::{Deserialize, Serialize};

use super::common::{JsonPatchOperation, Resource, Status};
use super::credentials::PrimaryStorageCredentials;
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

/// Schema holding the data mart tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSchemaName {
    pub schema_name: String,
}

/// Database backing a data mart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfiguration {
    pub database_type: String,
    pub credentials: PrimaryStorageCredentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationSchemaName>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMartDatabaseResponseEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_instance_crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_database: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_configuration: Option<DatabaseConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_discovery: Option<String>,
    #[serde(default)]
    pub status: Status,
}

pub type DataMartDatabaseResponse = Resource<DataMartDatabaseResponseEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMartDatabaseResponseCollection {
    pub data_marts: Vec<DataMartDatabaseResponse>,
}

/// Options for `list_data_marts`.
#[derive(Debug, Clone, Default)]
pub struct ListDataMartsOptions {
    pub headers: Option<Headers>,
}

impl ListDataMartsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListDataMartsOptions {});

/// Options for `add_data_mart`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddDataMartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_instance_crn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_database: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_configuration: Option<DatabaseConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_discovery: Option<String>,
    /// Create even if a data mart already exists for the instance.
    #[serde(skip)]
    pub force: Option<bool>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddDataMartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(AddDataMartOptions {
    name: String,
    description: String,
    service_instance_crn: String,
    internal_database: bool,
    database_configuration: DatabaseConfiguration,
    database_discovery: String,
    force: bool,
});

/// Options for `get_data_mart`.
#[derive(Debug, Clone, Default)]
pub struct GetDataMartOptions {
    pub data_mart_id: String,
    pub headers: Option<Headers>,
}

impl GetDataMartOptions {
    pub fn new(data_mart_id: impl Into<String>) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)
    }
}

option_setters!(GetDataMartOptions {});

/// Options for `patch_data_mart`.
#[derive(Debug, Clone, Default)]
pub struct PatchDataMartOptions {
    pub data_mart_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchDataMartOptions {
    pub fn new(data_mart_id: impl Into<String>, json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchDataMartOptions {});

/// Options for `delete_data_mart`.
#[derive(Debug, Clone, Default)]
pub struct DeleteDataMartOptions {
    pub data_mart_id: String,
    pub force: Option<bool>,
    pub headers: Option<Headers>,
}

impl DeleteDataMartOptions {
    pub fn new(data_mart_id: impl Into<String>) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)
    }
}

option_setters!(DeleteDataMartOptions { force: bool });
