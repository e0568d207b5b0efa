//! Integrated system methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddIntegratedSystemOptions, DeleteIntegratedSystemOptions, GetIntegratedSystemOptions,
    IntegratedSystemCollection, IntegratedSystemResponse, ListIntegratedSystemsOptions,
    PatchIntegratedSystemOptions,
};

impl OpenScaleClient {
    /// List integrated systems.
    pub async fn list_integrated_systems(
        &self,
        options: &ListIntegratedSystemsOptions,
    ) -> Result<DetailedResponse<IntegratedSystemCollection>> {
        endpoints::list_integrated_systems(self, options).await
    }

    /// Create an integrated system.
    pub async fn add_integrated_system(
        &self,
        options: &AddIntegratedSystemOptions,
    ) -> Result<DetailedResponse<IntegratedSystemResponse>> {
        endpoints::add_integrated_system(self, options).await
    }

    /// Get an integrated system by id.
    pub async fn get_integrated_system(
        &self,
        options: &GetIntegratedSystemOptions,
    ) -> Result<DetailedResponse<IntegratedSystemResponse>> {
        endpoints::get_integrated_system(self, options).await
    }

    /// Update an integrated system with a JSON Patch document.
    pub async fn patch_integrated_system(
        &self,
        options: &PatchIntegratedSystemOptions,
    ) -> Result<DetailedResponse<IntegratedSystemResponse>> {
        endpoints::patch_integrated_system(self, options).await
    }

    /// Delete an integrated system.
    pub async fn delete_integrated_system(
        &self,
        options: &DeleteIntegratedSystemOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_integrated_system(self, options).await
    }
}
