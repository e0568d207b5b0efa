//! Explanation task models and request options.
//!
//! Explanation results arrive as a list of [`ExplanationsItem`] values,
//! each tagged by `explanation_type`. Unrecognized explanation types are
//! kept verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::{ExtraFields, PageInfo, Status};
use super::options::{Headers, option_setters, require};
use super::union::{decode_as, tag};
use crate::error::Result;

/// LIME feature-importance explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimeExplanation {
    pub explanation_type: String,
    #[serde(default)]
    pub predictions: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Contrastive (pertinent positive / negative) explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastiveExplanation {
    pub explanation_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pertinent_positive: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pertinent_negative: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One explanation of a scored transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExplanationsItem {
    Lime(LimeExplanation),
    Contrastive(ContrastiveExplanation),
    Unknown(Map<String, Value>),
}

impl ExplanationsItem {
    /// The `explanation_type` tag, if present.
    pub fn explanation_type(&self) -> Option<&str> {
        match self {
            Self::Lime(e) => Some(&e.explanation_type),
            Self::Contrastive(e) => Some(&e.explanation_type),
            Self::Unknown(map) => tag(map, "explanation_type"),
        }
    }
}

impl<'de> Deserialize<'de> for ExplanationsItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        let decoded = match tag(&map, "explanation_type") {
            Some("lime") => decode_as(map).map(Self::Lime),
            Some("contrastive") => decode_as(map).map(Self::Contrastive),
            _ => Ok(Self::Unknown(map)),
        };
        decoded.map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationTaskMetadata {
    pub explanation_task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetExplanationTaskResponseEntity {
    #[serde(default)]
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_features: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perturbed: Option<bool>,
    #[serde(default)]
    pub explanations: Vec<ExplanationsItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetExplanationTaskResponse {
    pub metadata: ExplanationTaskMetadata,
    pub entity: GetExplanationTaskResponseEntity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostExplanationTaskResponseMetadata {
    #[serde(default)]
    pub explanation_task_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostExplanationTaskResponse {
    pub metadata: PostExplanationTaskResponseMetadata,
}

/// Tabular listing of explanation tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetExplanationTasksResponse {
    #[serde(default)]
    pub explanation_fields: Vec<String>,
    #[serde(default)]
    pub explanation_values: Vec<Vec<Value>>,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Options for `add_explanation_tasks`; the serialized form is the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddExplanationTasksOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_rows: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_field_names: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Option<Headers>,
}

impl AddExplanationTasksOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(AddExplanationTasksOptions {
    scoring_ids: Vec<String>,
    input_rows: Vec<Map<String, Value>>,
    explanation_types: Vec<String>,
    subscription_id: String,
    asset_field_names: Vec<String>,
});

/// Options for `list_explanation_tasks`.
#[derive(Debug, Clone, Default)]
pub struct ListExplanationTasksOptions {
    pub subscription_id: String,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub scoring_id: Option<String>,
    pub status: Option<String>,
    pub headers: Option<Headers>,
}

impl ListExplanationTasksOptions {
    pub fn new(subscription_id: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("subscription_id", &self.subscription_id)
    }
}

option_setters!(ListExplanationTasksOptions {
    offset: i64,
    limit: i64,
    scoring_id: String,
    status: String,
});

/// Options for `get_explanation_task`.
#[derive(Debug, Clone, Default)]
pub struct GetExplanationTaskOptions {
    pub explanation_task_id: String,
    pub subscription_id: Option<String>,
    pub headers: Option<Headers>,
}

impl GetExplanationTaskOptions {
    pub fn new(explanation_task_id: impl Into<String>) -> Self {
        Self {
            explanation_task_id: explanation_task_id.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("explanation_task_id", &self.explanation_task_id)
    }
}

option_setters!(GetExplanationTaskOptions { subscription_id: String });

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explanations_dispatch_by_type() {
        let entity: GetExplanationTaskResponseEntity = serde_json::from_value(json!({
            "status": {"state": "finished"},
            "explanations": [
                {"explanation_type": "lime", "predictions": [{"value": "No Risk"}]},
                {"explanation_type": "contrastive", "pertinent_positive": {"features": []}},
                {"explanation_type": "shap", "values": [1, 2]}
            ]
        }))
        .unwrap();

        assert!(matches!(entity.explanations[0], ExplanationsItem::Lime(_)));
        assert!(matches!(entity.explanations[1], ExplanationsItem::Contrastive(_)));
        assert!(matches!(entity.explanations[2], ExplanationsItem::Unknown(_)));
        assert_eq!(entity.explanations[2].explanation_type(), Some("shap"));
    }

    #[test]
    fn test_unknown_explanation_round_trips() {
        let raw = json!({"explanation_type": "shap", "values": [1, 2]});
        let item: ExplanationsItem = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_lime_keeps_extra_fields() {
        let raw = json!({"explanation_type": "lime", "predictions": [], "run_time": 12});
        let item: ExplanationsItem = serde_json::from_value(raw.clone()).unwrap();
        match &item {
            ExplanationsItem::Lime(lime) => assert_eq!(lime.extra["run_time"], json!(12)),
            other => panic!("Expected lime explanation, got {other:?}"),
        }
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_list_requires_subscription() {
        assert!(ListExplanationTasksOptions::new("").validate().is_err());
    }
}
