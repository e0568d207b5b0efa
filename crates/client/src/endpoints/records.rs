//! Data set record endpoints.
//!
//! # What this module handles:
//! - Adding records as a structured JSON array or a raw (CSV/JSON text) body
//! - Listing, reading and patching records of one data set
//! - Querying records across data sets and polling asynchronous uploads
//!
//! # Invariants
//! - A structured payload is always sent as `application/json`; a raw body
//!   carries `Content-Type` only when the caller supplied one.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::{ClientError, Result};
use crate::models::{
    DataRecordResponse, DataSetRecords, GetRecordOptions, GetRecordsRequestOptions,
    RecordsAddOptions, RecordsListOptions, RecordsListResponse, RecordsPatchOptions,
    RecordsQueryOptions, Status, UpdateRecordOptions,
};

const RECORDS: &str = "/v2/data_sets/{data_set_id}/records";
const RECORD: &str = "/v2/data_sets/{data_set_id}/records/{record_id}";

/// Add records to a data set.
///
/// Synchronous uploads return no body; asynchronous ones return a
/// [`Status`] and a `Location` header pointing at the request to poll.
pub async fn records_add(
    client: &OpenScaleClient,
    options: &RecordsAddOptions,
) -> Result<DetailedResponse<Option<Status>>> {
    options.validate()?;
    let path = resolve_path(RECORDS, &[("data_set_id", options.data_set_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "header" => options.header,
        "skip" => options.skip,
        "limit" => options.limit,
        "delimiter" => options.delimiter,
        "on_error" => options.on_error,
        "csv_max_line_length" => options.csv_max_line_length,
    }

    let request = ApiRequest::new(client, Method::POST, "records_add", path)
        .query(query)
        .headers(options.headers.as_ref());
    let request = match (&options.request_body, &options.body) {
        (Some(items), _) => request.json_body(items)?,
        (None, Some(raw)) => request.raw_body(raw.clone(), options.content_type.clone()),
        (None, None) => {
            return Err(ClientError::Validation(
                "request_body or body must be provided".to_string(),
            ));
        }
    };
    request.send_optional_json().await
}

/// List records of a data set.
pub async fn records_list(
    client: &OpenScaleClient,
    options: &RecordsListOptions,
) -> Result<DetailedResponse<RecordsListResponse>> {
    options.validate()?;
    let path = resolve_path(RECORDS, &[("data_set_id", options.data_set_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "start" => options.start,
        "end" => options.end,
        "limit" => options.limit,
        "offset" => options.offset,
        "includes" => options.includes,
        "annotations" => options.annotations,
        "exclude_annotations" => options.exclude_annotations,
        "filter" => options.filter,
        "include_total_count" => options.include_total_count,
        "order" => options.order,
        "seed" => options.seed,
        "format" => options.format,
        "binary_format" => options.binary_format,
    }
    ApiRequest::new(client, Method::GET, "records_list", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Patch several records of a data set in one call.
pub async fn records_patch(
    client: &OpenScaleClient,
    options: &RecordsPatchOptions,
) -> Result<DetailedResponse<Option<Status>>> {
    options.validate()?;
    let path = resolve_path(RECORDS, &[("data_set_id", options.data_set_id.as_str())])?;
    ApiRequest::new(client, Method::PATCH, "records_patch", path)
        .headers(options.headers.as_ref())
        .json_body(&options.patch_record_request)?
        .send_optional_json()
        .await
}

/// Get one record.
pub async fn get_record(
    client: &OpenScaleClient,
    options: &GetRecordOptions,
) -> Result<DetailedResponse<DataRecordResponse>> {
    options.validate()?;
    let path = resolve_path(
        RECORD,
        &[
            ("data_set_id", options.data_set_id.as_str()),
            ("record_id", options.record_id.as_str()),
        ],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "binary_format" => options.binary_format,
    }
    ApiRequest::new(client, Method::GET, "get_record", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update one record with a JSON Patch document.
pub async fn update_record(
    client: &OpenScaleClient,
    options: &UpdateRecordOptions,
) -> Result<DetailedResponse<DataRecordResponse>> {
    options.validate()?;
    let path = resolve_path(
        RECORD,
        &[
            ("data_set_id", options.data_set_id.as_str()),
            ("record_id", options.record_id.as_str()),
        ],
    )?;
    ApiRequest::new(client, Method::PATCH, "update_record", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Look up records by id across the data sets of one type.
pub async fn records_query(
    client: &OpenScaleClient,
    options: &RecordsQueryOptions,
) -> Result<DetailedResponse<DataSetRecords>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "data_set_type" => required options.data_set_type,
        "record_id" => options.record_id,
        "record_id_type" => options.record_id_type,
        "start" => options.start,
        "end" => options.end,
        "offset" => options.offset,
        "limit" => options.limit,
    }
    ApiRequest::new(client, Method::GET, "records_query", "/v2/data_set_records".to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Status of an asynchronous `records_add` request.
pub async fn get_records_request(
    client: &OpenScaleClient,
    options: &GetRecordsRequestOptions,
) -> Result<DetailedResponse<Status>> {
    options.validate()?;
    let path = resolve_path(
        "/v2/data_sets/{data_set_id}/requests",
        &[("data_set_id", options.data_set_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "request_id" => required options.request_id,
    }
    ApiRequest::new(client, Method::GET, "get_records_request", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}
