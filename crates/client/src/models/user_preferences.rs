//! User preference models and request options.
//!
//! Preference values are free-form JSON; [`UserPreferenceValue`] keeps the
//! scalar kinds typed and passes objects, arrays and null through untouched.
//! Numbers keep their JSON representation, so `5` is sent back as `5`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::common::JsonPatchOperation;
use super::options::{Headers, option_setters, require, require_items};
use crate::error::Result;

/// Value stored under a user preference key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserPreferenceValue {
    Text(String),
    Number(Number),
    Flag(bool),
    Object(Map<String, Value>),
    Array(Vec<Value>),
    Null,
}

impl From<&str> for UserPreferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for UserPreferenceValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for UserPreferenceValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Non-finite values have no JSON form and become `Null`.
impl From<f64> for UserPreferenceValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl From<bool> for UserPreferenceValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Map<String, Value>> for UserPreferenceValue {
    fn from(value: Map<String, Value>) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for UserPreferenceValue {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

/// All preferences of the calling user, keyed by preference name.
pub type UserPreferencesGetResponse = HashMap<String, UserPreferenceValue>;

/// Options for `list_user_preferences`.
#[derive(Debug, Clone, Default)]
pub struct ListUserPreferencesOptions {
    pub headers: Option<Headers>,
}

impl ListUserPreferencesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

option_setters!(ListUserPreferencesOptions {});

/// Options for `patch_user_preferences`.
#[derive(Debug, Clone, Default)]
pub struct PatchUserPreferencesOptions {
    pub json_patch_operation: Vec<JsonPatchOperation>,
    pub headers: Option<Headers>,
}

impl PatchUserPreferencesOptions {
    pub fn new(json_patch_operation: Vec<JsonPatchOperation>) -> Self {
        Self {
            json_patch_operation,
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_items("json_patch_operation", &self.json_patch_operation)
    }
}

option_setters!(PatchUserPreferencesOptions {});

/// Options for `get_user_preference`.
#[derive(Debug, Clone, Default)]
pub struct GetUserPreferenceOptions {
    pub user_preference_key: String,
    pub headers: Option<Headers>,
}

impl GetUserPreferenceOptions {
    pub fn new(user_preference_key: impl Into<String>) -> Self {
        Self {
            user_preference_key: user_preference_key.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("user_preference_key", &self.user_preference_key)
    }
}

option_setters!(GetUserPreferenceOptions {});

/// Options for `update_user_preference`.
#[derive(Debug, Clone)]
pub struct UpdateUserPreferenceOptions {
    pub user_preference_key: String,
    pub user_preferences_update_request: UserPreferenceValue,
    pub headers: Option<Headers>,
}

impl UpdateUserPreferenceOptions {
    pub fn new(
        user_preference_key: impl Into<String>,
        value: impl Into<UserPreferenceValue>,
    ) -> Self {
        Self {
            user_preference_key: user_preference_key.into(),
            user_preferences_update_request: value.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("user_preference_key", &self.user_preference_key)
    }
}

option_setters!(UpdateUserPreferenceOptions {});

/// Options for `delete_user_preference`.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserPreferenceOptions {
    pub user_preference_key: String,
    pub headers: Option<Headers>,
}

impl DeleteUserPreferenceOptions {
    pub fn new(user_preference_key: impl Into<String>) -> Self {
        Self {
            user_preference_key: user_preference_key.into(),
            headers: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("user_preference_key", &self.user_preference_key)
    }
}

option_setters!(DeleteUserPreferenceOptions {});

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_preference_value_kinds() {
        let prefs: UserPreferencesGetResponse = serde_json::from_value(json!({
            "default_service_instance": "abc",
            "refresh_interval": 30,
            "beta": true,
            "layout": {"columns": 2}
        }))
        .unwrap();

        assert_eq!(prefs["default_service_instance"], UserPreferenceValue::from("abc"));
        assert_eq!(prefs["refresh_interval"], UserPreferenceValue::from(30_i64));
        assert_eq!(prefs["beta"], UserPreferenceValue::Flag(true));
        assert!(matches!(prefs["layout"], UserPreferenceValue::Object(_)));
    }

    #[test]
    fn test_preference_value_serializes_bare() {
        assert_eq!(serde_json::to_value(UserPreferenceValue::from(true)).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(UserPreferenceValue::from("x")).unwrap(), json!("x"));
        assert_eq!(serde_json::to_value(UserPreferenceValue::from(f64::NAN)).unwrap(), json!(null));
    }

    #[test]
    fn test_integer_preference_round_trips_unchanged() {
        let value: UserPreferenceValue = serde_json::from_value(json!(5)).unwrap();
        assert_eq!(value, UserPreferenceValue::from(5_i64));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(5));

        let value: UserPreferenceValue = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(serde_json::to_value(&value).unwrap(), json!(2.5));
    }

    #[test]
    fn test_array_and_null_preferences_decode() {
        let prefs: UserPreferencesGetResponse = serde_json::from_value(json!({
            "favorites": ["a", "b"],
            "theme": "dark",
            "last_viewed": null
        }))
        .unwrap();

        assert_eq!(
            prefs["favorites"],
            UserPreferenceValue::Array(vec![json!("a"), json!("b")])
        );
        assert_eq!(prefs["theme"], UserPreferenceValue::from("dark"));
        assert_eq!(prefs["last_viewed"], UserPreferenceValue::Null);
        assert_eq!(
            serde_json::to_value(&prefs["favorites"]).unwrap(),
            json!(["a", "b"])
        );
    }
}
