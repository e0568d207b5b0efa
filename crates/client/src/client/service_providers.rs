//! Service provider methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddServiceProviderOptions, DeleteServiceProviderOptions, GetServiceProviderOptions,
    ListServiceProvidersOptions, PatchServiceProviderOptions, ServiceProviderResponse,
    ServiceProviderResponseCollection,
};

impl OpenScaleClient {
    /// List service providers.
    pub async fn list_service_providers(
        &self,
        options: &ListServiceProvidersOptions,
    ) -> Result<DetailedResponse<ServiceProviderResponseCollection>> {
        endpoints::list_service_providers(self, options).await
    }

    /// Register a machine learning service provider.
    pub async fn add_service_provider(
        &self,
        options: &AddServiceProviderOptions,
    ) -> Result<DetailedResponse<ServiceProviderResponse>> {
        endpoints::add_service_provider(self, options).await
    }

    /// Get a service provider by id.
    pub async fn get_service_provider(
        &self,
        options: &GetServiceProviderOptions,
    ) -> Result<DetailedResponse<ServiceProviderResponse>> {
        endpoints::get_service_provider(self, options).await
    }

    /// Update a service provider with a JSON Patch document.
    pub async fn patch_service_provider(
        &self,
        options: &PatchServiceProviderOptions,
    ) -> Result<DetailedResponse<ServiceProviderResponse>> {
        endpoints::patch_service_provider(self, options).await
    }

    /// Delete a service provider.
    pub async fn delete_service_provider(
        &self,
        options: &DeleteServiceProviderOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_service_provider(self, options).await
    }
}
