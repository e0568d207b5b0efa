//! Monitor definition, monitor instance, monitoring run and measurement
//! endpoints.

use reqwest::Method;

use super::request::ApiRequest;
use super::response::DetailedResponse;
use super::url_encoding::resolve_path;
use crate::client::OpenScaleClient;
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

const MONITOR_DEFINITIONS: &str = "/v2/monitor_definitions";
const MONITOR_DEFINITION: &str = "/v2/monitor_definitions/{monitor_definition_id}";
const MONITOR_INSTANCES: &str = "/v2/monitor_instances";
const MONITOR_INSTANCE: &str = "/v2/monitor_instances/{monitor_instance_id}";
const RUNS: &str = "/v2/monitor_instances/{monitor_instance_id}/runs";
const RUN: &str = "/v2/monitor_instances/{monitor_instance_id}/runs/{monitoring_run_id}";
const MEASUREMENTS: &str = "/v2/monitor_instances/{monitor_instance_id}/measurements";
const MEASUREMENT: &str =
    "/v2/monitor_instances/{monitor_instance_id}/measurements/{measurement_id}";

// ---------------------------------------------------------------------------
// Monitor definitions
// ---------------------------------------------------------------------------

/// List monitor definitions.
pub async fn list_monitor_definitions(
    client: &OpenScaleClient,
    options: &ListMonitorDefinitionsOptions,
) -> Result<DetailedResponse<MonitorCollections>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "name" => options.name,
    }
    ApiRequest::new(client, Method::GET, "list_monitor_definitions", MONITOR_DEFINITIONS.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create a custom monitor definition.
pub async fn add_monitor_definition(
    client: &OpenScaleClient,
    options: &AddMonitorDefinitionOptions,
) -> Result<DetailedResponse<MonitorDisplayForm>> {
    options.validate()?;
    ApiRequest::new(client, Method::POST, "add_monitor_definition", MONITOR_DEFINITIONS.to_string())
        .headers(options.headers.as_ref())
        .json_body(&options.body)?
        .send_json()
        .await
}

/// Get a monitor definition by id.
pub async fn get_monitor_definition(
    client: &OpenScaleClient,
    options: &GetMonitorDefinitionOptions,
) -> Result<DetailedResponse<MonitorDisplayForm>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_DEFINITION,
        &[("monitor_definition_id", options.monitor_definition_id.as_str())],
    )?;
    ApiRequest::new(client, Method::GET, "get_monitor_definition", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Replace a monitor definition.
pub async fn update_monitor_definition(
    client: &OpenScaleClient,
    options: &UpdateMonitorDefinitionOptions,
) -> Result<DetailedResponse<MonitorDisplayForm>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_DEFINITION,
        &[("monitor_definition_id", options.monitor_definition_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PUT, "update_monitor_definition", path)
        .headers(options.headers.as_ref())
        .json_body(&options.body)?
        .send_json()
        .await
}

/// Update a monitor definition with a JSON Patch document.
pub async fn patch_monitor_definition(
    client: &OpenScaleClient,
    options: &PatchMonitorDefinitionOptions,
) -> Result<DetailedResponse<MonitorDisplayForm>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_DEFINITION,
        &[("monitor_definition_id", options.monitor_definition_id.as_str())],
    )?;
    ApiRequest::new(client, Method::PATCH, "patch_monitor_definition", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a monitor definition.
pub async fn delete_monitor_definition(
    client: &OpenScaleClient,
    options: &DeleteMonitorDefinitionOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_DEFINITION,
        &[("monitor_definition_id", options.monitor_definition_id.as_str())],
    )?;
    ApiRequest::new(client, Method::DELETE, "delete_monitor_definition", path)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}

// ---------------------------------------------------------------------------
// Monitor instances
// ---------------------------------------------------------------------------

/// List monitor instances.
pub async fn list_monitor_instances(
    client: &OpenScaleClient,
    options: &ListMonitorInstancesOptions,
) -> Result<DetailedResponse<MonitorInstanceCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "data_mart_id" => options.data_mart_id,
        "monitor_definition_id" => options.monitor_definition_id,
        "target.target_id" => options.target_target_id,
        "target.target_type" => options.target_target_type,
        "expand" => options.expand,
    }
    ApiRequest::new(client, Method::GET, "list_monitor_instances", MONITOR_INSTANCES.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Create a monitor instance for a target.
pub async fn add_monitor_instance(
    client: &OpenScaleClient,
    options: &AddMonitorInstanceOptions,
) -> Result<DetailedResponse<MonitorInstanceResponse>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "skip_scheduler" => options.skip_scheduler,
    }
    ApiRequest::new(client, Method::POST, "add_monitor_instance", MONITOR_INSTANCES.to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a monitor instance by id.
pub async fn get_monitor_instance(
    client: &OpenScaleClient,
    options: &GetMonitorInstanceOptions,
) -> Result<DetailedResponse<MonitorInstanceResponse>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_INSTANCE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "expand" => options.expand,
    }
    ApiRequest::new(client, Method::GET, "get_monitor_instance", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a monitor instance with a JSON Patch document.
pub async fn patch_monitor_instance(
    client: &OpenScaleClient,
    options: &PatchMonitorInstanceOptions,
) -> Result<DetailedResponse<MonitorInstanceResponse>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_INSTANCE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "update_metadata_only" => options.update_metadata_only,
    }
    ApiRequest::new(client, Method::PATCH, "patch_monitor_instance", path)
        .query(query)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

/// Delete a monitor instance.
pub async fn delete_monitor_instance(
    client: &OpenScaleClient,
    options: &DeleteMonitorInstanceOptions,
) -> Result<DetailedResponse<()>> {
    options.validate()?;
    let path = resolve_path(
        MONITOR_INSTANCE,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "delete_integrated_system_links" => options.delete_integrated_system_links,
    }
    ApiRequest::new(client, Method::DELETE, "delete_monitor_instance", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_empty()
        .await
}

// ---------------------------------------------------------------------------
// Monitoring runs
// ---------------------------------------------------------------------------

/// List runs of a monitor instance.
pub async fn list_runs(
    client: &OpenScaleClient,
    options: &ListRunsOptions,
) -> Result<DetailedResponse<MonitoringRunCollection>> {
    options.validate()?;
    let path = resolve_path(RUNS, &[("monitor_instance_id", options.monitor_instance_id.as_str())])?;
    let mut query = vec![];
    crate::query_params! { query =>
        "start" => options.start,
        "limit" => options.limit,
    }
    ApiRequest::new(client, Method::GET, "list_runs", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Trigger a monitoring run.
pub async fn add_run(
    client: &OpenScaleClient,
    options: &AddRunOptions,
) -> Result<DetailedResponse<MonitoringRun>> {
    options.validate()?;
    let path = resolve_path(RUNS, &[("monitor_instance_id", options.monitor_instance_id.as_str())])?;
    ApiRequest::new(client, Method::POST, "add_run", path)
        .headers(options.headers.as_ref())
        .json_body(options)?
        .send_json()
        .await
}

/// Get a monitoring run by id.
pub async fn get_run(
    client: &OpenScaleClient,
    options: &GetRunOptions,
) -> Result<DetailedResponse<MonitoringRun>> {
    options.validate()?;
    let path = resolve_path(
        RUN,
        &[
            ("monitor_instance_id", options.monitor_instance_id.as_str()),
            ("monitoring_run_id", options.monitoring_run_id.as_str()),
        ],
    )?;
    ApiRequest::new(client, Method::GET, "get_run", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Update a monitoring run with a JSON Patch document.
pub async fn update_run(
    client: &OpenScaleClient,
    options: &UpdateRunOptions,
) -> Result<DetailedResponse<MonitoringRun>> {
    options.validate()?;
    let path = resolve_path(
        RUN,
        &[
            ("monitor_instance_id", options.monitor_instance_id.as_str()),
            ("monitoring_run_id", options.monitoring_run_id.as_str()),
        ],
    )?;
    ApiRequest::new(client, Method::PATCH, "update_run", path)
        .headers(options.headers.as_ref())
        .json_patch_body(&options.json_patch_operation)?
        .send_json()
        .await
}

// ---------------------------------------------------------------------------
// Measurements and metrics
// ---------------------------------------------------------------------------

/// List measurements of a monitor instance within a time window.
pub async fn list_measurements(
    client: &OpenScaleClient,
    options: &ListMeasurementsOptions,
) -> Result<DetailedResponse<MonitorMeasurementResponseCollection>> {
    options.validate()?;
    let path = resolve_path(
        MEASUREMENTS,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "start" => options.start,
        "end" => options.end,
        "run_id" => options.run_id,
        "filter" => options.filter,
        "limit" => options.limit,
        "offset" => options.offset,
    }
    ApiRequest::new(client, Method::GET, "list_measurements", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Publish measurements for a monitor instance.
pub async fn add_measurements(
    client: &OpenScaleClient,
    options: &AddMeasurementsOptions,
) -> Result<DetailedResponse<MeasurementsCreated>> {
    options.validate()?;
    let path = resolve_path(
        MEASUREMENTS,
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    ApiRequest::new(client, Method::POST, "add_measurements", path)
        .headers(options.headers.as_ref())
        .json_body(&options.monitor_measurement_request)?
        .send_json()
        .await
}

/// Get a measurement by id.
pub async fn get_measurement(
    client: &OpenScaleClient,
    options: &GetMeasurementOptions,
) -> Result<DetailedResponse<MonitorMeasurementResponse>> {
    options.validate()?;
    let path = resolve_path(
        MEASUREMENT,
        &[
            ("monitor_instance_id", options.monitor_instance_id.as_str()),
            ("measurement_id", options.measurement_id.as_str()),
        ],
    )?;
    ApiRequest::new(client, Method::GET, "get_measurement", path)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Query the most recent measurements across monitor instances.
pub async fn measurements_query(
    client: &OpenScaleClient,
    options: &MeasurementsQueryOptions,
) -> Result<DetailedResponse<MeasurementsResponseCollection>> {
    options.validate()?;
    let mut query = vec![];
    crate::query_params! { query =>
        "target_id" => options.target_id,
        "target_type" => options.target_type,
        "monitor_definition_id" => options.monitor_definition_id,
        "recent_count" => options.recent_count,
        "format" => options.format,
    }
    ApiRequest::new(client, Method::GET, "measurements_query", "/v2/measurements".to_string())
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}

/// Aggregated metric values of a monitor instance.
pub async fn metrics_list(
    client: &OpenScaleClient,
    options: &MetricsListOptions,
) -> Result<DetailedResponse<DataMartGetMonitorInstanceMetrics>> {
    options.validate()?;
    let path = resolve_path(
        "/v2/monitor_instances/{monitor_instance_id}/metrics",
        &[("monitor_instance_id", options.monitor_instance_id.as_str())],
    )?;
    let mut query = vec![];
    crate::query_params! { query =>
        "start" => options.start,
        "end" => options.end,
        "agg" => required options.agg,
        "interval" => options.interval,
        "filter" => options.filter,
        "group" => options.group,
    }
    ApiRequest::new(client, Method::GET, "metrics_list", path)
        .query(query)
        .headers(options.headers.as_ref())
        .send_json()
        .await
}
