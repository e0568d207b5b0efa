//! Data mart endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddDataMartOptions, DataMartDatabaseResponse, DataMartDatabaseResponseCollection,
    DeleteDataMartOptions, GetDataMartOptions, ListDataMartsOptions, PatchDataMartOptions,
};

const DATA_MARTS: &str = "/v2/data_marts";
const DATA_MART: &str = "/v2/data_marts/{data_mart_id}";

/// List data marts.
pub async fn list_data_marts(
    client: &OpenScaleClient,
    options: &ListDataMartsOptions,
) -> Result<DetailedResponse<DataMartDatabaseResponseCollection>> {
    options.validate()?;
    ApiRequest::new(client, Method::GET, "list_data_marts", DATA_MARTS.to_string())
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create a data mart.
pub async fn add_data_mart(
    client: &OpenScaleClient,
    options: &AddDataMartOptions,
) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "force" => options.force,
    }
    ApiRequest::new(client, Method::POST, "add_data_mart", DATA_MARTS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a data mart by id.
pub async fn get_data_mart(
    client: &OpenScaleClient,
    options: &GetDataMartOptions,
) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
    options.validate()?;
    let path = resolve_path(DATA_MART, &[("data_mart_id", options.data_mart_id.as_str())])?;
    ApiRequest::new(client, Method::GET, "get_data_mart", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a data mart with a JSON Patch document.
pub async fn patch_data_mart(
    client: &OpenScaleClient,
    options: &PatchDataMartOptions,
) -> Result<DetailedResponse<DataMartDatabaseResponse>> {
    options.validate()?;
    let path = resolve_path(DATA_MART, &[("data_mart_id", options.data_mart_id.as_str())])?;
    ApiRequest::new(client, Method::PATCH, "patch_data_mart", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a data mart.
pub async fn delete_data_mart(
    client: &OpenScaleClient,
    options: &DeleteDataMartOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(DATA_MART, &[("data_mart_id", options.data_mart_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "force" => options.force,
    }
    ApiRequest::new(client, Method::DELETE, "delete_data_mart", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
