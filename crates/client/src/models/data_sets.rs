//! Data set models and request options.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{JsonPatchOperation, Resource, SparkStruct, Status, Target};
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetResponseEntity {
    pub data_mart_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub data_set_type: String,
    pub target: Target,
    pub data_schema: SparkStruct,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_update_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(default)]
    pub status: Status,
}

pub type DataSetResponse = Resource<DataSetResponseEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetResponseCollection {
    pub data_sets: Vec<DataSetResponse>,
}

/// Options for `list_data_sets`.
#[derive(Debug, Clone, Default)]
pub struct ListDataSetsOptions {
    pub target_target_id: Option<String>,
    pub target_target_type: Option<String>,
    pub data_set_type: Option<String>,
    pub managed_by: Option<String>,
    pub headers: Option<Headers>,
}

impl ListDataSetsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListDataSetsOptions {
    target_target_id: String,
    target_target_type: String,
    data_set_type: String,
    managed_by: String,
});

/// Options for `add_data_set`; the serialized form is the request body.
#[derive(Debug, Clone, Serialize)]
pub struct AddDataSetOptions {
    pub data_mart_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub data_set_type: String,
    pub target: Target,
    pub data_schema: SparkStruct,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_update_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    /// Return immediately with 202 while the table is created.
    #[serde(skip)]
    pub background_mode: Option<bool>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddDataSetOptions {
    pub fn new(
        data_mart_id: impl Into<String>,
        name: impl Into<String>,
        data_set_type: impl Into<String>,
        target: Target,
        data_schema: SparkStruct,
    ) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            name: name.into(),
            data_set_type: data_set_type.into(),
            target,
            data_schema,
            description: None,
            schema_update_mode: None,
            location: None,
            managed_by: None,
            background_mode: None,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)?;
        require("name", &self.name)?;
        require("type", &self.data_set_type)?;
        require("target.target_id", &self.target.target_id)
    }
}

option_setters!(AddDataSetOptions {
    description: String,
    schema_update_mode: String,
    location: Value,
    managed_by: String,
    background_mode: bool,
});

/// Options for `get_data_set`.
#[derive(Debug, Clone, Default)]
pub struct GetDataSetOptions {
    pub data_set_id: String,
    pub headers: Option<Headers>,
}

impl GetDataSetOptions {
    pub fn new(data_set_id: impl Into<String>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)
    }
}

option_setters!(GetDataSetOptions {});

/// Options for `patch_data_set`.
#[derive(Debug, Clone, Default)]
pub struct PatchDataSetOptions {
    pub data_set_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchDataSetOptions {
    pub fn new(data_set_id: impl Into<String>, json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchDataSetOptions {});

/// Options for `delete_data_set`.
#[derive(Debug, Clone, Default)]
pub struct DeleteDataSetOptions {
    pub data_set_id: String,
    pub background_delete: Option<bool>,
    pub headers: Option<Headers>,
}

impl DeleteDataSetOptions {
    pub fn new(data_set_id: impl Into<String>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)
    }
}

option_setters!(DeleteDataSetOptions { background_delete: bool });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SparkStructField;
    use serde_json::json;

    #[test]
    fn test_add_data_set_body_uses_type_key() {
        let options = AddDataSetOptions::new(
            "dm-1",
            "payload",
            "payload_logging",
            Target::subscription("sub-1"),
            SparkStruct::new(vec![SparkStructField::new("age", "integer", true)]),
        )
        .background_mode(true);

        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(body["type"], json!("payload_logging"));
        assert_eq!(body["target"], json!({"target_type": "subscription", "target_id": "sub-1"}));
        assert!(body.get("background_mode").is_none());
    }
}
