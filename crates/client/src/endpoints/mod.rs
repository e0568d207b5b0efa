//! REST API endpoint implementations.
//!
//! One free function per remote operation, grouped by resource family.
//! Each function validates its options, resolves the route, and sends the
//! request through the shared [`request::ApiRequest`] builder.

mod business_applications;
mod data_marts;
mod data_sets;
mod drift;
mod explanations;
mod integrated_systems;
mod monitors;
mod operational_spaces;
pub mod query_params;
mod records;
pub(crate) mod request;
pub mod response;
mod service_providers;
mod subscriptions;
pub mod url_encoding;
mod user_preferences;

pub use business_applications::{
    add_business_application, delete_business_application, get_business_application,
    list_business_applications, patch_business_application,
};
pub use data_marts::{
    add_data_mart, delete_data_mart, get_data_mart, list_data_marts, patch_data_mart,
};
pub use data_sets::{add_data_set, delete_data_set, get_data_set, list_data_sets, patch_data_set};
pub use drift::{download_drift_archive, head_drift_archive, upload_drift_archive};
pub use explanations::{add_explanation_tasks, get_explanation_task, list_explanation_tasks};
pub use integrated_systems::{
    add_integrated_system, delete_integrated_system, get_integrated_system,
    list_integrated_systems, patch_integrated_system,
};
pub use monitors::{
    add_measurements, add_monitor_definition, add_monitor_instance, add_run,
    delete_monitor_definition, delete_monitor_instance, get_measurement, get_monitor_definition,
    get_monitor_instance, get_run, list_measurements, list_monitor_definitions,
    list_monitor_instances, list_runs, measurements_query, metrics_list,
    patch_monitor_definition, patch_monitor_instance, update_monitor_definition, update_run,
};
pub use operational_spaces::{
    add_operational_space, delete_operational_space, get_operational_space,
    list_operational_spaces, update_operational_space,
};
pub use records::{
    get_record, get_records_request, records_add, records_list, records_patch, records_query,
    update_record,
};
pub use request::RetryPolicy;
pub use response::DetailedResponse;
pub use service_providers::{
    add_service_provider, delete_service_provider, get_service_provider, list_service_providers,
    patch_service_provider,
};
pub use subscriptions::{
    add_subscription, delete_subscription, get_subscription, list_subscriptions,
    patch_subscription, subscriptions_schemas, subscriptions_tables,
};
pub use url_encoding::{encode_path_segment, resolve_path};
pub use user_preferences::{
    delete_user_preference, get_user_preference, list_user_preferences, patch_user_preferences,
    update_user_preference,
};
