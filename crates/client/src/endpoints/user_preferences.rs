//! User preference endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
use crate::error::Result;
use crate::models::{
    DeleteUserPreferenceOptions, GetUserPreferenceOptions, ListUserPreferencesOptions,
    PatchUserPreferencesOptions, UpdateUserPreferenceOptions, UserPreferenceValue,
    UserPreferencesGetResponse,
};

const USER_PREFERENCES: &str = "/v2/user_preferences";
const USER_PREFERENCE: &str = "/v2/user_preferences/{user_preference_key}";

/// All preferences of the calling user.
pub async fn list_user_preferences(
    client: &OpenScaleClient,
    options: &ListUserPreferencesOptions,
) -> Result<DetailedResponse<UserPreferencesGetResponse>> {
    options.validate()?;
    let path = USER_PREFERENCES.to_string();
    ApiRequest::new(client, Method::GET, "list_user_preferences", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update several preferences with a JSON Patch document.
pub async fn patch_user_preferences(
    client: &OpenScaleClient,
    options: &PatchUserPreferencesOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = USER_PREFERENCES.to_string();
    ApiRequest::new(client, Method::PATCH, "patch_user_preferences", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_empty()
        .await
}

/// Get one preference value.
pub async fn get_user_preference(
    client: &OpenScaleClient,
    options: &GetUserPreferenceOptions,
) -> Result<DetailedResponse<UserPreferenceValue>> {
    options.validate()?;
    let path = resolve_path(
        USER_PREFERENCE,
        &[("user_preference_key", options.user_preference_key.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_user_preference", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Set one preference value.
pub async fn update_user_preference(
    client: &OpenScaleClient,
    options: &UpdateUserPreferenceOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        USER_PREFERENCE,
        &[("user_preference_key", options.user_preference_key.as_str())],
    )?;
    ApiRequest::new(client, Method::PUT, "update_user_preference", path)
        .headers(options.headers.as_ref())
        .json_body(&options.user_preferences_update_request)?
        .send_empty()
        .await
}

/// Remove one preference.
pub async fn delete_user_preference(
    client: &OpenScaleClient,
    options: &DeleteUserPreferenceOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        USER_PREFERENCE,
        &[("user_preference_key", options.user_preference_key.as_str())],
    )?;
    ApiRequest::new(client, Method::DELETE, "delete_user_preference", path)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}
