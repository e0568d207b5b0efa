//! Data models for the OpenScale v2 REST API.
//!
//! Types are organized by resource family in submodules and re-exported
//! here. Each family module holds both the response shapes and the
//! per-operation options structs.
//!
//! # Invariants
//! - Options structs validate required members with `validate()` before
//!   any request is built.
//! - Polymorphic payloads decode through the shared machinery in `union`.

pub mod business_applications;
pub mod common;
pub mod credentials;
pub mod data_marts;
pub mod data_sets;
pub mod drift;
pub mod explanations;
pub mod integrated_systems;
pub mod monitors;
pub mod operational_spaces;
pub(crate) mod options;
pub mod records;
pub mod service_providers;
pub mod subscriptions;
pub mod training_data;
pub(crate) mod union;
pub mod user_preferences;

pub use business_applications::*;
pub use common::{
    ErrorItem, ExtraFields, GenericErrorResponse, JsonPatchOperation, Metadata, PageInfo, PatchOp,
    Resource, SparkStruct, SparkStructField, Status, StatusState, Target,
};
pub use credentials::*;
pub use data_marts::*;
pub use data_sets::*;
pub use drift::*;
pub use explanations::*;
pub use integrated_systems::*;
pub use monitors::*;
pub use operational_spaces::*;
pub use options::Headers;
pub use records::*;
pub use service_providers::*;
pub use subscriptions::*;
pub use training_data::*;
pub use user_preferences::*;
