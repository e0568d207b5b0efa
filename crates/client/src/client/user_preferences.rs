//! User preference methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    DeleteUserPreferenceOptions, GetUserPreferenceOptions, ListUserPreferencesOptions,
    PatchUserPreferencesOptions, UpdateUserPreferenceOptions, UserPreferenceValue,
    UserPreferencesGetResponse,
};

impl OpenScaleClient {
    /// All preferences of the calling user.
    pub async fn list_user_preferences(
        &self,
        options: &ListUserPreferencesOptions,
    ) -> Result<DetailedResponse<UserPreferencesGetResponse>> {
        endpoints::list_user_preferences(self, options).await
    }

    /// Update several preferences with a JSON Patch document.
    pub async fn patch_user_preferences(
        &self,
        options: &PatchUserPreferencesOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::patch_user_preferences(self, options).await
    }

    /// Get one preference value.
    pub async fn get_user_preference(
        &self,
        options: &GetUserPreferenceOptions,
    ) -> Result<DetailedResponse<UserPreferenceValue>> {
        endpoints::get_user_preference(self, options).await
    }

    /// Set one preference value.
    pub async fn update_user_preference(
        &self,
        options: &UpdateUserPreferenceOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::update_user_preference(self, options).await
    }

    /// Remove one preference.
    pub async fn delete_user_preference(
        &self,
        options: &DeleteUserPreferenceOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_user_preference(self, options).await
    }
}
