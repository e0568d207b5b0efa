//! Data set endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddDataSetOptions, DataSetResponse, DataSetResponseCollection, DeleteDataSetOptions,
    GetDataSetOptions, ListDataSetsOptions, PatchDataSetOptions,
};

const DATA_SETS: &str = "/v2/data_sets";
const DATA_SET: &str = "/v2/data_sets/{data_set_id}";

/// List data sets.
pub async fn list_data_sets(
    client: &OpenScaleClient,
    options: &ListDataSetsOptions,
) -> Result<DetailedResponse<DataSetResponseCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "target.target_id" => options.target_target_id,
        "target.target_type" => options.target_target_type,
        "type" => options.data_set_type,
        "managed_by" => options.managed_by,
    }
    ApiRequest::new(client, Method::GET, "list_data_sets", DATA_SETS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create a data set.
pub async fn add_data_set(
    client: &OpenScaleClient,
    options: &AddDataSetOptions,
) -> Result<DetailedResponse<DataSetResponse>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "background_mode" => options.background_mode,
    }
    ApiRequest::new(client, Method::POST, "add_data_set", DATA_SETS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a data set by id.
pub async fn get_data_set(
    client: &OpenScaleClient,
    options: &GetDataSetOptions,
) -> Result<DetailedResponse<DataSetResponse>> {
    options.validate()?;
    let path = resolve_path(DATA_SET, &[("data_set_id", options.data_set_id.as_str())])?;
    ApiRequest::new(client, Method::GET, "get_data_set", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a data set with a JSON Patch document.
pub async fn patch_data_set(
    client: &OpenScaleClient,
    options: &PatchDataSetOptions,
) -> Result<DetailedResponse<DataSetResponse>> {
    options.validate()?;
    let path = resolve_path(DATA_SET, &[("data_set_id", options.data_set_id.as_str())])?;
    ApiRequest::new(client, Method::PATCH, "patch_data_set", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a data set.
pub async fn delete_data_set(
    client: &OpenScaleClient,
    options: &DeleteDataSetOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(DATA_SET, &[("data_set_id", options.data_set_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "background_delete" => options.background_delete,
    }
    ApiRequest::new(client, Method::DELETE, "delete_data_set", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
