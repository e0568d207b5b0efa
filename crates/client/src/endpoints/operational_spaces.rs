//! Operational space endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    AddOperationalSpaceOptions, DeleteOperationalSpaceOptions, GetOperationalSpaceOptions,
    ListOperationalSpacesOptions, OperationalSpaceCollection, OperationalSpaceResponse,
    UpdateOperationalSpaceOptions,
};

const OPERATIONAL_SPACES: &str = "/v2/operational_spaces";
const OPERATIONAL_SPACE: &str = "/v2/operational_spaces/{operational_space_id}";

/// List operational spaces.
pub async fn list_operational_spaces(
    client: &OpenScaleClient,
    options: &ListOperationalSpacesOptions,
) -> Result<DetailedResponse<OperationalSpaceCollection>> {
    options.validate()?;
    ApiRequest::new(client, Method::GET, "list_operational_spaces", OPERATIONAL_SPACES.to_string())
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create an operational space.
pub async fn add_operational_space(
    client: &OpenScaleClient,
    options: &AddOperationalSpaceOptions,
) -> Result<DetailedResponse<OperationalSpaceResponse>> {
    options.validate()?;
    ApiRequest::new(client, Method::POST, "add_operational_space", OPERATIONAL_SPACES.to_string())
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get an operational space by id.
pub async fn get_operational_space(
    client: &OpenScaleClient,
    options: &GetOperationalSpaceOptions,
) -> Result<DetailedResponse<OperationalSpaceResponse>> {
    options.validate()?;
    let path = resolve_path(
        OPERATIONAL_SPACE,
        &[("operational_space_id", options.operational_space_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_operational_space", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update an operational space with a JSON Patch document.
pub async fn update_operational_space(
    client: &OpenScaleClient,
    options: &UpdateOperationalSpaceOptions,
) -> Result<DetailedResponse<OperationalSpaceResponse>> {
    options.validate()?;
    let path = resolve_path(
        OPERATIONAL_SPACE,
        &[("operational_space_id", options.operational_space_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PATCH, "update_operational_space", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete an operational space.
pub async fn delete_operational_space(
    client: &OpenScaleClient,
    options: &DeleteOperationalSpaceOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        OPERATIONAL_SPACE,
        &[("operational_space_id", options.operational_space_id.as_str())],
    )?;
    ApiRequest::new(client, Method::DELETE, "delete_operational_space", path)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
