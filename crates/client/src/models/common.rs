//! Common types shared across OpenScale API models.
//!
//! This module contains the `{metadata, entity}` resource envelope, status
//! and error shapes, JSON Patch documents and the Spark schema types used by
//! several resource families. It does NOT contain resource-specific models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Unrecognized JSON members kept alongside typed fields.
pub type ExtraFields = Map<String, Value>;

/// Resource metadata returned with every entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

/// Generic `{metadata, entity}` envelope used by every OpenScale resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

/// Lifecycle state reported in [`Status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Preparing,
    Active,
    Pending,
    Running,
    Finished,
    Completed,
    Error,
    Failed,
    Deleting,
    /// Unknown or unrecognized state.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Preparing => "preparing",
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Finished => "finished",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Failed => "failed",
            Self::Deleting => "deleting",
            Self::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Resource or asynchronous request status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Status {
    #[serde(default)]
    pub state: StatusState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<GenericErrorResponse>,
}

/// One entry of the service error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorItem {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Service error body: `{"trace": "...", "errors": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenericErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorItem>,
}

/// RFC 6902 operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

/// One RFC 6902 JSON Patch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            from: None,
            value: Some(value),
        }
    }

    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            from: None,
            value: Some(value),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }
}

/// Reference to the object a data set or monitor instance is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub target_type: String,
    pub target_id: String,
}

impl Target {
    pub fn new(target_type: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            target_id: target_id.into(),
        }
    }

    /// Target pointing at a subscription.
    pub fn subscription(subscription_id: impl Into<String>) -> Self {
        Self::new("subscription", subscription_id)
    }
}

/// Spark-style table schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkStruct {
    #[serde(rename = "type", default = "SparkStruct::struct_type")]
    pub struct_type: String,
    pub fields: Vec<SparkStructField>,
}

impl SparkStruct {
    fn struct_type() -> String {
        "struct".to_string()
    }

    pub fn new(fields: Vec<SparkStructField>) -> Self {
        Self {
            struct_type: Self::struct_type(),
            fields,
        }
    }
}

/// Column of a [`SparkStruct`]; `field_type` is a type name or a nested schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparkStructField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Value,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl SparkStructField {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            field_type: Value::String(field_type.into()),
            nullable,
            metadata: None,
        }
    }
}

/// Pagination counters returned by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_unknown_state() {
        let status: Status = serde_json::from_value(json!({"state": "upgrading"})).unwrap();
        assert_eq!(status.state, StatusState::Unknown);
    }

    #[test]
    fn test_status_failure() {
        let status: Status = serde_json::from_value(json!({
            "state": "error",
            "failure": {"trace": "t1", "errors": [{"code": "E1", "message": "boom"}]}
        }))
        .unwrap();
        assert_eq!(status.state, StatusState::Error);
        assert_eq!(status.failure.unwrap().errors[0].message, "boom");
    }

    #[test]
    fn test_json_patch_serialization() {
        let ops = vec![
            JsonPatchOperation::replace("/name", json!("renamed")),
            JsonPatchOperation::remove("/description"),
        ];
        assert_eq!(
            serde_json::to_value(&ops).unwrap(),
            json!([
                {"op": "replace", "path": "/name", "value": "renamed"},
                {"op": "remove", "path": "/description"}
            ])
        );
    }

    #[test]
    fn test_spark_struct_defaults_type() {
        let schema: SparkStruct = serde_json::from_value(json!({
            "fields": [{"name": "age", "type": "integer", "nullable": true}]
        }))
        .unwrap();
        assert_eq!(schema.struct_type, "struct");
        assert_eq!(schema.fields[0].field_type, json!("integer"));
    }

    #[test]
    fn test_metadata_timestamps() {
        let metadata: Metadata = serde_json::from_value(json!({
            "id": "dm-1",
            "url": "/v2/data_marts/dm-1",
            "created_at": "2021-03-04T10:11:12.345Z"
        }))
        .unwrap();
        assert_eq!(metadata.id, "dm-1");
        assert!(metadata.created_at.is_some());
        assert!(metadata.modified_at.is_none());
    }
}
