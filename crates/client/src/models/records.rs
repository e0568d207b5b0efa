//! Data set record models and request options.
//!
//! Records are returned in one of two layouts depending on the `format`
//! query parameter: `dict` (one object per record) or `list` (a `fields`
//! array plus row `values`). [`RecordsListResponse`] detects the layout
//! from the payload itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::{ExtraFields, JsonPatchOperation, PageInfo, Target};
use super::options::{Headers, option_setters, require, require_items};
use super::union::{ShapeMatcher, decode_as, decode_by_shape};
use crate::error::{ClientError, Result};

/// Scoring request/response pair logged as one payload record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPayloadRecord {
    pub request: Value,
    pub response: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<i64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Column names plus row values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldsValuesRecord {
    pub fields: Vec<String>,
    pub values: Vec<Vec<Value>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One item of a structured `records_add` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DatasetRecordsPayloadItem {
    ScoringPayload(ScoringPayloadRecord),
    Fields(FieldsValuesRecord),
    /// Plain `{column: value}` record.
    Object(Map<String, Value>),
}

const PAYLOAD_ITEM_SHAPES: &[ShapeMatcher<DatasetRecordsPayloadItem>] = &[
    ShapeMatcher {
        required: &["request", "response"],
        decode: |m| decode_as(m).map(DatasetRecordsPayloadItem::ScoringPayload),
    },
    ShapeMatcher {
        required: &["fields", "values"],
        decode: |m| decode_as(m).map(DatasetRecordsPayloadItem::Fields),
    },
];

impl<'de> Deserialize<'de> for DatasetRecordsPayloadItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        decode_by_shape(map, PAYLOAD_ITEM_SHAPES, DatasetRecordsPayloadItem::Object)
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordMetadata {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Record values keyed by column name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordEntity {
    pub values: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Map<String, Value>>,
}

/// One record in `dict` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DataRecordMetadata>,
    pub entity: DataRecordEntity,
}

/// Record values as parallel field and row arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordListEntity {
    pub values: RecordValuesList,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordValuesList {
    pub fields: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

/// One record in `list` layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordResponseList {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DataRecordMetadata>,
    pub entity: DataRecordListEntity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecordsCollection<R> {
    pub records: Vec<R>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Result of `records_list`, in whichever layout the service returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordsListResponse {
    Dict(DataRecordsCollection<DataRecordResponse>),
    List(DataRecordsCollection<DataRecordResponseList>),
}

impl RecordsListResponse {
    /// List layout carries `entity.values` as exactly `{fields, values}`:
    /// column names and rows of cells. Anything else is a dict record, even
    /// when one of its columns happens to be named `fields`.
    fn is_list_layout(map: &Map<String, Value>) -> bool {
        let Some(values) = map
            .get("records")
            .and_then(Value::as_array)
            .and_then(|records| records.first())
            .and_then(|record| record.pointer("/entity/values"))
            .and_then(Value::as_object)
        else {
            return false;
        };

        let fields_are_names = values
            .get("fields")
            .and_then(Value::as_array)
            .is_some_and(|fields| fields.iter().all(Value::is_string));
        let rows_are_arrays = values
            .get("values")
            .and_then(Value::as_array)
            .is_some_and(|rows| rows.iter().all(Value::is_array));

        values.len() == 2 && fields_are_names && rows_are_arrays
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        match self {
            Self::Dict(c) => c.records.len(),
            Self::List(c) => c.records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for RecordsListResponse {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        let decoded = if Self::is_list_layout(&map) {
            decode_as(map).map(Self::List)
        } else {
            decode_as(map).map(Self::Dict)
        };
        decoded.map_err(serde::de::Error::custom)
    }
}

/// One entry of a `records_patch` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchRecordRequest {
    pub record_id: String,
    pub patch_document: Vec<JsonPatchOperation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_timestamp: Option<DateTime<Utc>>,
}

/// Data set identification in a `records_query` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetObject {
    pub data_set_id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_set_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_mart_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetRecord {
    pub data_set: DataSetObject,
    #[serde(default)]
    pub records: Vec<DataRecordResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSetRecords {
    pub data_set_records: Vec<DataSetRecord>,
}

/// Options for `records_add`.
///
/// Either a structured `request_body` or a raw `body` (CSV or JSON text)
/// must be supplied; a structured payload takes precedence.
#[derive(Debug, Clone, Default)]
pub struct RecordsAddOptions {
    pub data_set_id: String,
    pub request_body: Option<Vec<DatasetRecordsPayloadItem>>,
    pub body: Option<Vec<u8>>,
    /// Content type of a raw `body`, e.g. `text/csv`.
    pub content_type: Option<String>,
    pub header: Option<bool>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub delimiter: Option<String>,
    pub on_error: Option<String>,
    pub csv_max_line_length: Option<i64>,
    pub headers: Option<Headers>,
}

impl RecordsAddOptions {
    pub fn new(data_set_id: impl Into<String>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        if self.request_body.is_none() && self.body.is_none() {
            return Err(ClientError::Validation(
                "request_body or body must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

option_setters!(RecordsAddOptions {
    request_body: Vec<DatasetRecordsPayloadItem>,
    body: Vec<u8>,
    content_type: String,
    header: bool,
    skip: i64,
    limit: i64,
    delimiter: String,
    on_error: String,
    csv_max_line_length: i64,
});

/// Options for `records_list`.
#[derive(Debug, Clone, Default)]
pub struct RecordsListOptions {
    pub data_set_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub includes: Option<String>,
    pub annotations: Option<Vec<String>>,
    pub exclude_annotations: Option<bool>,
    pub filter: Option<String>,
    pub include_total_count: Option<bool>,
    pub order: Option<String>,
    pub seed: Option<i64>,
    /// `dict` or `list`.
    pub format: Option<String>,
    pub binary_format: Option<String>,
    pub headers: Option<Headers>,
}

impl RecordsListOptions {
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

option_setters!(RecordsListOptions {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: i64,
    offset: i64,
    includes: String,
    annotations: Vec<String>,
    exclude_annotations: bool,
    filter: String,
    include_total_count: bool,
    order: String,
    seed: i64,
    format: String,
    binary_format: String,
});

/// Options for `records_patch`.
#[derive(Debug, Clone, Default)]
pub struct RecordsPatchOptions {
    pub data_set_id: String,
    pub patch_record_request: Vec<PatchRecordRequest>,
    pub headers: Option<Headers>,
}

impl RecordsPatchOptions {
    pub fn new(data_set_id: impl Into<String>, patch_record_request: Vec<PatchRecordRequest>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            patch_record_request,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        require_items("patch_record_request", &self.patch_record_request)
    }
}

option_setters!(RecordsPatchOptions {});

/// Options for `get_record`.
#[derive(Debug, Clone, Default)]
pub struct GetRecordOptions {
    pub data_set_id: String,
    pub record_id: String,
    pub binary_format: Option<String>,
    pub headers: Option<Headers>,
}

impl GetRecordOptions {
    pub fn new(data_set_id: impl Into<String>, record_id: impl Into<String>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            record_id: record_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        require("record_id", &self.record_id)
    }
}

option_setters!(GetRecordOptions { binary_format: String });

/// Options for `update_record`.
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordOptions {
    pub data_set_id: String,
    pub record_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl UpdateRecordOptions {
    pub fn new(
        data_set_id: impl Into<String>,
        record_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            record_id: record_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        require("record_id", &self.record_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(UpdateRecordOptions {});

/// Options for `records_query`: look up records across data sets.
#[derive(Debug, Clone, Default)]
pub struct RecordsQueryOptions {
    pub data_set_type: String,
    pub record_id: Option<Vec<String>>,
    pub record_id_type: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: Option<Headers>,
}

impl RecordsQueryOptions {
    pub fn new(data_set_type: impl Into<String>) -> Self {
        Self {
            data_set_type: data_set_type.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_type", &self.data_set_type)
    }
}

option_setters!(RecordsQueryOptions {
    record_id: Vec<String>,
    record_id_type: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    offset: i64,
    limit: i64,
});

/// Options for `get_records_request`: poll an asynchronous `records_add`.
#[derive(Debug, Clone, Default)]
pub struct GetRecordsRequestOptions {
    pub data_set_id: String,
    pub request_id: String,
    pub headers: Option<Headers>,
}

impl GetRecordsRequestOptions {
    pub fn new(data_set_id: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self {
            data_set_id: data_set_id.into(),
            request_id: request_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_set_id", &self.data_set_id)?;
        require("request_id", &self.request_id)
    }
}

option_setters!(GetRecordsRequestOptions {});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_item_shapes() {
        let items: Vec<DatasetRecordsPayloadItem> = serde_json::from_value(json!([
            {"request": {"fields": ["a"], "values": [[1]]}, "response": {"predictions": []}},
            {"fields": ["a", "b"], "values": [[1, 2]]},
            {"a": 1, "b": 2}
        ]))
        .unwrap();

        assert!(matches!(items[0], DatasetRecordsPayloadItem::ScoringPayload(_)));
        assert!(matches!(items[1], DatasetRecordsPayloadItem::Fields(_)));
        assert!(matches!(items[2], DatasetRecordsPayloadItem::Object(_)));
    }

    #[test]
    fn test_records_list_dict_layout() {
        let response: RecordsListResponse = serde_json::from_value(json!({
            "records": [{
                "metadata": {"id": "r1"},
                "entity": {"values": {"age": 31, "risk": "No Risk"}}
            }],
            "total_count": 1
        }))
        .unwrap();

        match response {
            RecordsListResponse::Dict(collection) => {
                assert_eq!(collection.page.total_count, Some(1));
                assert_eq!(collection.records[0].entity.values["age"], json!(31));
            }
            other => panic!("Expected dict layout, got {other:?}"),
        }
    }

    #[test]
    fn test_records_list_list_layout() {
        let response: RecordsListResponse = serde_json::from_value(json!({
            "records": [{
                "entity": {"values": {"fields": ["age"], "values": [[31], [45]]}}
            }]
        }))
        .unwrap();

        match response {
            RecordsListResponse::List(collection) => {
                assert_eq!(collection.records[0].entity.values.values.len(), 2);
            }
            other => panic!("Expected list layout, got {other:?}"),
        }
    }

    #[test]
    fn test_records_list_column_named_fields_stays_dict() {
        let response: RecordsListResponse = serde_json::from_value(json!({
            "records": [{
                "metadata": {"id": "r1"},
                "entity": {"values": {"fields": ["income", "age"], "scoring_id": "s-1"}}
            }]
        }))
        .unwrap();

        match response {
            RecordsListResponse::Dict(collection) => {
                let values = &collection.records[0].entity.values;
                assert_eq!(values["fields"], json!(["income", "age"]));
                assert_eq!(values["scoring_id"], json!("s-1"));
            }
            other => panic!("Expected dict layout, got {other:?}"),
        }
    }

    #[test]
    fn test_records_list_empty_is_dict() {
        let response: RecordsListResponse =
            serde_json::from_value(json!({"records": []})).unwrap();
        assert!(response.is_empty());
        assert!(matches!(response, RecordsListResponse::Dict(_)));
    }

    #[test]
    fn test_records_add_requires_payload() {
        assert!(RecordsAddOptions::new("ds-1").validate().is_err());
        assert!(RecordsAddOptions::new("ds-1")
            .body(b"a,b\n1,2\n".to_vec())
            .validate()
            .is_ok());
    }
}
