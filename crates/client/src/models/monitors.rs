//! Monitor definition, monitor instance, monitoring run and measurement
//! models with their request options.
//!
//! # Responsibilities
//! - Monitor definitions: metric and tag catalogues for a monitor type.
//! - Monitor instances: a definition applied to a target.
//! - Runs and measurements produced by a monitor instance.
//!
//! # Invariants
//! - Threshold, metric and tag payloads keep unknown members in `extra`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{ExtraFields, JsonPatchOperation, Metadata, PageInfo, Resource, Status, Target};
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Monitor definitions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricThreshold {
    #[serde(rename = "type")]
    pub threshold_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_recommendation: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MetricThreshold {
    pub fn new(threshold_type: impl Into<String>, default: f64) -> Self {
        Self {
            threshold_type: threshold_type.into(),
            default: Some(default),
            default_recommendation: None,
            extra: ExtraFields::new(),
        }
    }
}

/// One metric a monitor definition can report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMetricRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<MetricThreshold>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MonitorMetricRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            thresholds: Vec::new(),
            expected_direction: None,
            required: None,
            extra: ExtraFields::new(),
        }
    }
}

/// One tag a measurement of this monitor may carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorTagRequest {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MonitorTagRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            id: None,
            extra: ExtraFields::new(),
        }
    }
}

/// Scheduling of automatic monitor runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorInstanceSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Value>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDefinitionEntity {
    pub name: String,
    #[serde(default)]
    pub metrics: Vec<MonitorMetricRequest>,
    #[serde(default)]
    pub tags: Vec<MonitorTagRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MonitorInstanceSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_runtime: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

pub type MonitorDisplayForm = Resource<MonitorDefinitionEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorCollections {
    pub monitor_definitions: Vec<MonitorDisplayForm>,
}

/// Options for `list_monitor_definitions`.
#[derive(Debug, Clone, Default)]
pub struct ListMonitorDefinitionsOptions {
    pub name: Option<String>,
    pub headers: Option<Headers>,
}

impl ListMonitorDefinitionsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListMonitorDefinitionsOptions { name: String });

/// Body shared by `add_monitor_definition` and `update_monitor_definition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonitorDefinitionBody {
    pub name: String,
    pub metrics: Vec<MonitorMetricRequest>,
    pub tags: Vec<MonitorTagRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MonitorInstanceSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_runtime: Option<Value>,
}

impl MonitorDefinitionBody {
    fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require_items("metrics", &self.metrics)?;
        require_items("tags", &self.tags)
    }
}

/// Options for `add_monitor_definition`.
#[derive(Debug, Clone, Default)]
pub struct AddMonitorDefinitionOptions {
    pub body: MonitorDefinitionBody,
    pub headers: Option<Headers>,
}

impl AddMonitorDefinitionOptions {
    pub fn new(
        name: impl Into<String>,
        metrics: Vec<MonitorMetricRequest>,
        tags: Vec<MonitorTagRequest>,
    ) -> Self {
        Self {
            body: MonitorDefinitionBody {
                name: name.into(),
                metrics,
                tags,
                ..Default::default()
            },
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.body.validate()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.body.description = Some(description.into());
        self
    }

    pub fn applies_to(mut self, applies_to: Value) -> Self {
        self.body.applies_to = Some(applies_to);
        self
    }

    pub fn parameters_schema(mut self, parameters_schema: Value) -> Self {
        self.body.parameters_schema = Some(parameters_schema);
        self
    }

    pub fn managed_by(mut self, managed_by: impl Into<String>) -> Self {
        self.body.managed_by = Some(managed_by.into());
        self
    }

    pub fn schedule(mut self, schedule: MonitorInstanceSchedule) -> Self {
        self.body.schedule = Some(schedule);
        self
    }

    pub fn monitor_runtime(mut self, monitor_runtime: Value) -> Self {
        self.body.monitor_runtime = Some(monitor_runtime);
        self
    }
}

option_setters!(AddMonitorDefinitionOptions {});

/// Options for `get_monitor_definition`.
#[derive(Debug, Clone, Default)]
pub struct GetMonitorDefinitionOptions {
    pub monitor_definition_id: String,
    pub headers: Option<Headers>,
}

impl GetMonitorDefinitionOptions {
    pub fn new(monitor_definition_id: impl Into<String>) -> Self {
        Self {
            monitor_definition_id: monitor_definition_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_definition_id", &self.monitor_definition_id)
    }
}

option_setters!(GetMonitorDefinitionOptions {});

/// Options for `update_monitor_definition`: full replacement with PUT.
#[derive(Debug, Clone, Default)]
pub struct UpdateMonitorDefinitionOptions {
    pub monitor_definition_id: String,
    pub body: MonitorDefinitionBody,
    pub headers: Option<Headers>,
}

impl UpdateMonitorDefinitionOptions {
    pub fn new(monitor_definition_id: impl Into<String>, body: MonitorDefinitionBody) -> Self {
        Self {
            monitor_definition_id: monitor_definition_id.into(),
            body,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_definition_id", &self.monitor_definition_id)?;
        self.body.validate()
    }
}

option_setters!(UpdateMonitorDefinitionOptions {});

/// Options for `patch_monitor_definition`.
#[derive(Debug, Clone, Default)]
pub struct PatchMonitorDefinitionOptions {
    pub monitor_definition_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchMonitorDefinitionOptions {
    pub fn new(
        monitor_definition_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            monitor_definition_id: monitor_definition_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_definition_id", &self.monitor_definition_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchMonitorDefinitionOptions {});

/// Options for `delete_monitor_definition`.
#[derive(Debug, Clone, Default)]
pub struct DeleteMonitorDefinitionOptions {
    pub monitor_definition_id: String,
    pub headers: Option<Headers>,
}

impl DeleteMonitorDefinitionOptions {
    pub fn new(monitor_definition_id: impl Into<String>) -> Self {
        Self {
            monitor_definition_id: monitor_definition_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_definition_id", &self.monitor_definition_id)
    }
}

option_setters!(DeleteMonitorDefinitionOptions {});

// ---------------------------------------------------------------------------
// Monitor instances
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricThresholdOverride {
    pub metric_id: String,
    #[serde(rename = "type")]
    pub threshold_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl MetricThresholdOverride {
    pub fn new(metric_id: impl Into<String>, threshold_type: impl Into<String>, value: f64) -> Self {
        Self {
            metric_id: metric_id.into(),
            threshold_type: threshold_type.into(),
            value: Some(value),
            extra: ExtraFields::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorInstanceEntity {
    pub data_mart_id: String,
    pub monitor_definition_id: String,
    pub target: Target,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thresholds: Vec<MetricThresholdOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MonitorInstanceSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unprocessed_records: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<Value>,
    #[serde(default)]
    pub status: Status,
}

pub type MonitorInstanceResponse = Resource<MonitorInstanceEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorInstanceCollection {
    pub monitor_instances: Vec<MonitorInstanceResponse>,
}

/// Options for `list_monitor_instances`.
#[derive(Debug, Clone, Default)]
pub struct ListMonitorInstancesOptions {
    pub data_mart_id: Option<String>,
    pub monitor_definition_id: Option<String>,
    pub target_target_id: Option<String>,
    pub target_target_type: Option<String>,
    pub expand: Option<bool>,
    pub headers: Option<Headers>,
}

impl ListMonitorInstancesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListMonitorInstancesOptions {
    data_mart_id: String,
    monitor_definition_id: String,
    target_target_id: String,
    target_target_type: String,
    expand: bool,
});

/// Options for `add_monitor_instance`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddMonitorInstanceOptions {
    pub data_mart_id: String,
    pub monitor_definition_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<MetricThresholdOverride>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<MonitorInstanceSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
    #[serde(skip)]
    pub skip_scheduler: Option<bool>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddMonitorInstanceOptions {
    pub fn new(
        data_mart_id: impl Into<String>,
        monitor_definition_id: impl Into<String>,
        target: Target,
    ) -> Self {
        Self {
            data_mart_id: data_mart_id.into(),
            monitor_definition_id: monitor_definition_id.into(),
            target: Some(target),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("data_mart_id", &self.data_mart_id)?;
        require("monitor_definition_id", &self.monitor_definition_id)?;
        match &self.target {
            Some(target) => require("target.target_id", &target.target_id),
            None => require("target", ""),
        }
    }
}

option_setters!(AddMonitorInstanceOptions {
    parameters: Map<String, Value>,
    thresholds: Vec<MetricThresholdOverride>,
    schedule: MonitorInstanceSchedule,
    managed_by: String,
    skip_scheduler: bool,
});

/// Options for `get_monitor_instance`.
#[derive(Debug, Clone, Default)]
pub struct GetMonitorInstanceOptions {
    pub monitor_instance_id: String,
    pub expand: Option<bool>,
    pub headers: Option<Headers>,
}

impl GetMonitorInstanceOptions {
    pub fn new(monitor_instance_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)
    }
}

option_setters!(GetMonitorInstanceOptions { expand: bool });

/// Options for `patch_monitor_instance`.
#[derive(Debug, Clone, Default)]
pub struct PatchMonitorInstanceOptions {
    pub monitor_instance_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub update_metadata_only: Option<bool>,
    pub headers: Option<Headers>,
}

impl PatchMonitorInstanceOptions {
    pub fn new(
        monitor_instance_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            json_patch_operation,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchMonitorInstanceOptions { update_metadata_only: bool });

/// Options for `delete_monitor_instance`.
#[derive(Debug, Clone, Default)]
pub struct DeleteMonitorInstanceOptions {
    pub monitor_instance_id: String,
    pub delete_integrated_system_links: Option<bool>,
    pub headers: Option<Headers>,
}

impl DeleteMonitorInstanceOptions {
    pub fn new(monitor_instance_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)
    }
}

option_setters!(DeleteMonitorInstanceOptions { delete_integrated_system_links: bool });

// ---------------------------------------------------------------------------
// Monitoring runs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringRunEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_metric_context: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Status,
}

pub type MonitoringRun = Resource<MonitoringRunEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringRunCollection {
    pub runs: Vec<MonitoringRun>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Options for `list_runs`.
#[derive(Debug, Clone, Default)]
pub struct ListRunsOptions {
    pub monitor_instance_id: String,
    /// Opaque pagination cursor returned by the previous page.
    pub start: Option<String>,
    pub limit: Option<i64>,
    pub headers: Option<Headers>,
}

impl ListRunsOptions {
    pub fn new(monitor_instance_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)
    }
}

option_setters!(ListRunsOptions {
    start: String,
    limit: i64,
});

/// Options for `add_run`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddRunOptions {
    #[serde(skip)]
    pub monitor_instance_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_metric_context: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddRunOptions {
    pub fn new(monitor_instance_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)
    }
}

option_setters!(AddRunOptions {
    triggered_by: String,
    parameters: Map<String, Value>,
    business_metric_context: Value,
    expiration_date: DateTime<Utc>,
});

/// Options for `get_run`.
#[derive(Debug, Clone, Default)]
pub struct GetRunOptions {
    pub monitor_instance_id: String,
    pub monitoring_run_id: String,
    pub headers: Option<Headers>,
}

impl GetRunOptions {
    pub fn new(monitor_instance_id: impl Into<String>, monitoring_run_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            monitoring_run_id: monitoring_run_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require("monitoring_run_id", &self.monitoring_run_id)
    }
}

option_setters!(GetRunOptions {});

/// Options for `update_run`.
#[derive(Debug, Clone, Default)]
pub struct UpdateRunOptions {
    pub monitor_instance_id: String,
    pub monitoring_run_id: String,
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl UpdateRunOptions {
    pub fn new(
        monitor_instance_id: impl Into<String>,
        monitoring_run_id: impl Into<String>,
        json_patch_operation: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            monitoring_run_id: monitoring_run_id.into(),
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require("monitoring_run_id", &self.monitoring_run_id)?;
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(UpdateRunOptions {});

// ---------------------------------------------------------------------------
// Measurements and metrics
// ---------------------------------------------------------------------------

/// Metric values recorded for one measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMeasurementMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMeasurementRequest {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metrics: Vec<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_revision: Option<String>,
}

impl MonitorMeasurementRequest {
    pub fn new(timestamp: DateTime<Utc>, metrics: Vec<Map<String, Value>>) -> Self {
        Self {
            timestamp,
            metrics,
            run_id: None,
            sources: None,
            asset_revision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_definition_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Value>>,
}

pub type MonitorMeasurementResponse = Resource<MeasurementEntity>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorMeasurementResponseCollection {
    pub measurements: Vec<MonitorMeasurementResponse>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Result of `measurements_query`; shape depends on `format`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementsResponseCollection {
    #[serde(default)]
    pub measurements: Vec<Value>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Result of `metrics_list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMartGetMonitorInstanceMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_definition_id: Option<String>,
    #[serde(default)]
    pub groups: Vec<Value>,
}

/// Options for `list_measurements`.
#[derive(Debug, Clone, Default)]
pub struct ListMeasurementsOptions {
    pub monitor_instance_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub run_id: Option<String>,
    pub filter: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub headers: Option<Headers>,
}

impl ListMeasurementsOptions {
    pub fn new(monitor_instance_id: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require_present("start", self.start.as_ref())?;
        require_present("end", self.end.as_ref())
    }
}

option_setters!(ListMeasurementsOptions {
    run_id: String,
    filter: String,
    limit: i64,
    offset: i64,
});

/// Options for `add_measurements`.
#[derive(Debug, Clone, Default)]
pub struct AddMeasurementsOptions {
    pub monitor_instance_id: String,
    pub monitor_measurement_request: Vec<MonitorMeasurementRequest>,
    pub headers: Option<Headers>,
}

impl AddMeasurementsOptions {
    pub fn new(
        monitor_instance_id: impl Into<String>,
        monitor_measurement_request: Vec<MonitorMeasurementRequest>,
    ) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            monitor_measurement_request,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require_items("monitor_measurement_request", &self.monitor_measurement_request)
    }
}

option_setters!(AddMeasurementsOptions {});

/// Options for `get_measurement`.
#[derive(Debug, Clone, Default)]
pub struct GetMeasurementOptions {
    pub monitor_instance_id: String,
    pub measurement_id: String,
    pub headers: Option<Headers>,
}

impl GetMeasurementOptions {
    pub fn new(monitor_instance_id: impl Into<String>, measurement_id: impl Into<String>) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            measurement_id: measurement_id.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require("measurement_id", &self.measurement_id)
    }
}

option_setters!(GetMeasurementOptions {});

/// Options for `measurements_query`.
#[derive(Debug, Clone, Default)]
pub struct MeasurementsQueryOptions {
    pub target_id: Option<String>,
    pub target_type: Option<String>,
    pub monitor_definition_id: Option<String>,
    pub recent_count: Option<i64>,
    /// `compact` or `full`.
    pub format: Option<String>,
    pub headers: Option<Headers>,
}

impl MeasurementsQueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(MeasurementsQueryOptions {
    target_id: String,
    target_type: String,
    monitor_definition_id: String,
    recent_count: i64,
    format: String,
});

/// Options for `metrics_list`.
#[derive(Debug, Clone, Default)]
pub struct MetricsListOptions {
    pub monitor_instance_id: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Aggregation: `last`, `first`, `max`, `min`, `sum`, `avg`, `count`.
    pub agg: String,
    pub interval: Option<String>,
    pub filter: Option<String>,
    pub group: Option<String>,
    pub headers: Option<Headers>,
}

impl MetricsListOptions {
    pub fn new(
        monitor_instance_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        agg: impl Into<String>,
    ) -> Self {
        Self {
            monitor_instance_id: monitor_instance_id.into(),
            start: Some(start),
            end: Some(end),
            agg: agg.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("monitor_instance_id", &self.monitor_instance_id)?;
        require_present("start", self.start.as_ref())?;
        require_present("end", self.end.as_ref())?;
        require("agg", &self.agg)
    }
}

option_setters!(MetricsListOptions {
    interval: String,
    filter: String,
    group: String,
});

fn require_present<T>(field: &'static str, value: Option<&T>) -> Result<()> {
    match value {
        Some(_) => Ok(()),
        None => require(field, ""),
    }
}

/// Metadata of each created measurement, returned by `add_measurements`.
pub type MeasurementsCreated = Vec<Metadata>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use serde_json::json;

    #[test]
    fn test_add_monitor_definition_requires_metrics_and_tags() {
        let options = AddMonitorDefinitionOptions::new("quality", vec![], vec![]);
        assert!(matches!(
            options.validate(),
            Err(ClientError::Validation(msg)) if msg.starts_with("metrics")
        ));

        let options = AddMonitorDefinitionOptions::new(
            "quality",
            vec![MonitorMetricRequest::new("area_under_roc")],
            vec![MonitorTagRequest::new("region", "deployment region")],
        );
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_add_monitor_instance_body() {
        let options = AddMonitorInstanceOptions::new("dm-1", "quality", Target::subscription("sub-1"))
            .thresholds(vec![MetricThresholdOverride::new("area_under_roc", "lower_limit", 0.8)])
            .skip_scheduler(true);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "data_mart_id": "dm-1",
                "monitor_definition_id": "quality",
                "target": {"target_type": "subscription", "target_id": "sub-1"},
                "thresholds": [{"metric_id": "area_under_roc", "type": "lower_limit", "value": 0.8}]
            })
        );
    }

    #[test]
    fn test_metrics_list_requires_agg() {
        let now = Utc::now();
        assert!(MetricsListOptions::new("mi-1", now, now, "").validate().is_err());
        assert!(MetricsListOptions::new("mi-1", now, now, "avg").validate().is_ok());
    }

    #[test]
    fn test_list_measurements_requires_window() {
        let options = ListMeasurementsOptions {
            monitor_instance_id: "mi-1".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ClientError::Validation(msg)) if msg == "start must be provided"
        ));
    }

    #[test]
    fn test_monitoring_run_response() {
        let run: MonitoringRun = serde_json::from_value(json!({
            "metadata": {"id": "run-1"},
            "entity": {"triggered_by": "user", "status": {"state": "finished"}}
        }))
        .unwrap();
        assert_eq!(run.entity.triggered_by.as_deref(), Some("user"));
    }
}
