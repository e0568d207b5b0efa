//! Monitor definition, instance, run and measurement methods for [`OpenScaleClient`].

use crate::client::OpenScaleClient;
use crate::endpoints::{self, DetailedResponse};
use crate::error::Result;
use crate::models::{
    AddMeasurementsOptions, AddMonitorDefinitionOptions, AddMonitorInstanceOptions, AddRunOptions,
    DataMartGetMonitorInstanceMetrics, DeleteMonitorDefinitionOptions,
    DeleteMonitorInstanceOptions, GetMeasurementOptions, GetMonitorDefinitionOptions,
    GetMonitorInstanceOptions, GetRunOptions, ListMeasurementsOptions,
    ListMonitorDefinitionsOptions, ListMonitorInstancesOptions, ListRunsOptions,
    MeasurementsCreated, MeasurementsQueryOptions, MeasurementsResponseCollection,
    MetricsListOptions, MonitorCollections, MonitorDisplayForm, MonitorInstanceCollection,
    MonitorInstanceResponse, MonitorMeasurementResponse, MonitorMeasurementResponseCollection,
    MonitoringRun, MonitoringRunCollection, PatchMonitorDefinitionOptions,
    PatchMonitorInstanceOptions, UpdateMonitorDefinitionOptions, UpdateRunOptions,
};

impl OpenScaleClient {
    /// List monitor definitions.
    pub async fn list_monitor_definitions(
        &self,
        options: &ListMonitorDefinitionsOptions,
    ) -> Result<DetailedResponse<MonitorCollections>> {
        endpoints::list_monitor_definitions(self, options).await
    }

    /// Create a custom monitor definition.
    pub async fn add_monitor_definition(
        &self,
        options: &AddMonitorDefinitionOptions,
    ) -> Result<DetailedResponse<MonitorDisplayForm>> {
        endpoints::add_monitor_definition(self, options).await
    }

    /// Get a monitor definition by id.
    pub async fn get_monitor_definition(
        &self,
        options: &GetMonitorDefinitionOptions,
    ) -> Result<DetailedResponse<MonitorDisplayForm>> {
        endpoints::get_monitor_definition(self, options).await
    }

    /// Replace a monitor definition.
    pub async fn update_monitor_definition(
        &self,
        options: &UpdateMonitorDefinitionOptions,
    ) -> Result<DetailedResponse<MonitorDisplayForm>> {
        endpoints::update_monitor_definition(self, options).await
    }

    /// Update a monitor definition with a JSON Patch document.
    pub async fn patch_monitor_definition(
        &self,
        options: &PatchMonitorDefinitionOptions,
    ) -> Result<DetailedResponse<MonitorDisplayForm>> {
        endpoints::patch_monitor_definition(self, options).await
    }

    /// Delete a monitor definition.
    pub async fn delete_monitor_definition(
        &self,
        options: &DeleteMonitorDefinitionOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_monitor_definition(self, options).await
    }

    /// List monitor instances.
    pub async fn list_monitor_instances(
        &self,
        options: &ListMonitorInstancesOptions,
    ) -> Result<DetailedResponse<MonitorInstanceCollection>> {
        endpoints::list_monitor_instances(self, options).await
    }

    /// Create a monitor instance for a target.
    pub async fn add_monitor_instance(
        &self,
        options: &AddMonitorInstanceOptions,
    ) -> Result<DetailedResponse<MonitorInstanceResponse>> {
        endpoints::add_monitor_instance(self, options).await
    }

    /// Get a monitor instance by id.
    pub async fn get_monitor_instance(
        &self,
        options: &GetMonitorInstanceOptions,
    ) -> Result<DetailedResponse<MonitorInstanceResponse>> {
        endpoints::get_monitor_instance(self, options).await
    }

    /// Update a monitor instance with a JSON Patch document.
    pub async fn patch_monitor_instance(
        &self,
        options: &PatchMonitorInstanceOptions,
    ) -> Result<DetailedResponse<MonitorInstanceResponse>> {
        endpoints::patch_monitor_instance(self, options).await
    }

    /// Delete a monitor instance.
    pub async fn delete_monitor_instance(
        &self,
        options: &DeleteMonitorInstanceOptions,
    ) -> Result<DetailedResponse<()>> {
        endpoints::delete_monitor_instance(self, options).await
    }

    /// List runs of a monitor instance.
    pub async fn list_runs(
        &self,
        options: &ListRunsOptions,
    ) -> Result<DetailedResponse<MonitoringRunCollection>> {
        endpoints::list_runs(self, options).await
    }

    /// Trigger a monitoring run.
    pub async fn add_run(
        &self,
        options: &AddRunOptions,
    ) -> Result<DetailedResponse<MonitoringRun>> {
        endpoints::add_run(self, options).await
    }

    /// Get a monitoring run by id.
    pub async fn get_run(
        &self,
        options: &GetRunOptions,
    ) -> Result<DetailedResponse<MonitoringRun>> {
        endpoints::get_run(self, options).await
    }

    /// Update a monitoring run with a JSON Patch document.
    pub async fn update_run(
        &self,
        options: &UpdateRunOptions,
    ) -> Result<DetailedResponse<MonitoringRun>> {
        endpoints::update_run(self, options).await
    }

    /// List measurements of a monitor instance within a time window.
    pub async fn list_measurements(
        &self,
        options: &ListMeasurementsOptions,
    ) -> Result<DetailedResponse<MonitorMeasurementResponseCollection>> {
        endpoints::list_measurements(self, options).await
    }

    /// Publish measurements for a monitor instance.
    pub async fn add_measurements(
        &self,
        options: &AddMeasurementsOptions,
    ) -> Result<DetailedResponse<MeasurementsCreated>> {
        endpoints::add_measurements(self, options).await
    }

    /// Get a measurement by id.
    pub async fn get_measurement(
        &self,
        options: &GetMeasurementOptions,
    ) -> Result<DetailedResponse<MonitorMeasurementResponse>> {
        endpoints::get_measurement(self, options).await
    }

    /// Query the most recent measurements across monitor instances.
    pub async fn measurements_query(
        &self,
        options: &MeasurementsQueryOptions,
    ) -> Result<DetailedResponse<MeasurementsResponseCollection>> {
        endpoints::measurements_query(self, options).await
    }

    /// Aggregated metric values of a monitor instance.
    pub async fn metrics_list(
        &self,
        options: &MetricsListOptions,
    ) -> Result<DetailedResponse<DataMartGetMonitorInstanceMetrics>> {
        endpoints::metrics_list(self, options).await
    }
}
