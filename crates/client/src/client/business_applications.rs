//! Business application methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddBusinessApplicationOptions, BusinessApplicationResponse, BusinessApplicationsCollection,
    DeleteBusinessApplicationOptions, GetBusinessApplicationOptions,
    ListBusinessApplicationsOptions, PatchBusinessApplicationOptions,
};

impl OpenScaleClient {
    /// List business applications.
    pub async fn list_business_applications(
        &self,
        options: &ListBusinessApplicationsOptions,
    ) -> Result<DetailedResponse<BusinessApplicationsCollection>> {
        endpoints::list_business_applications(self, options).await
    }

    /// Create a business application.
    pub async fn add_business_application(
        &self,
        options: &AddBusinessApplicationOptions,
    ) -> Result<DetailedResponse<BusinessApplicationResponse>> {
        endpoints::add_business_application(self, options).await
    }

    /// Get a business application by id.
    pub async fn get_business_application(
        &self,
        options: &GetBusinessApplicationOptions,
    ) -> Result<DetailedResponse<BusinessApplicationResponse>> {
        endpoints::get_business_application(self, options).await
    }

    /// Update a business application with a JSON Patch document.
    pub async fn patch_business_application(
        &self,
        options: &PatchBusinessApplicationOptions,
    ) -> Result<DetailedResponse<BusinessApplicationResponse>> {
        endpoints::patch_business_application(self, options).await
    }

    /// Delete a business application.
    pub async fn delete_business_application(
        &self,
        options: &DeleteBusinessApplicationOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_business_application(self, options).await
    }
}
