//! Operational space methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddOperationalSpaceOptions, DeleteOperationalSpaceOptions, GetOperationalSpaceOptions,
    ListOperationalSpacesOptions, OperationalSpaceCollection, OperationalSpaceResponse,
    UpdateOperationalSpaceOptions,
};

impl OpenScaleClient {
    /// List operational spaces.
    pub async fn list_operational_spaces(
        &self,
        options: &ListOperationalSpacesOptions,
    ) -> Result<DetailedResponse<OperationalSpaceCollection>> {
        endpoints::list_operational_spaces(self, options).await
    }

    /// Create an operational space.
    pub async fn add_operational_space(
        &self,
        options: &AddOperationalSpaceOptions,
    ) -> Result<DetailedResponse<OperationalSpaceResponse>> {
        endpoints::add_operational_space(self, options).await
    }

    /// Get an operational space by id.
    pub async fn get_operational_space(
        &self,
        options: &GetOperationalSpaceOptions,
    ) -> Result<DetailedResponse<OperationalSpaceResponse>> {
        endpoints::get_operational_space(self, options).await
    }

    /// Update an operational space with a JSON Patch document.
    pub async fn update_operational_space(
        &self,
        options: &UpdateOperationalSpaceOptions,
    ) -> Result<DetailedResponse<OperationalSpaceResponse>> {
        endpoints::update_operational_space(self, options).await
    }

    /// Delete an operational space.
    pub async fn delete_operational_space(
        &self,
        options: &DeleteOperationalSpaceOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_operational_space(self, options).await
    }
}
