//! Training data references: where a model's training data lives.
//!
//! A reference carries a `type` (`db2`, `cos`, `dataset`, `file_asset`)
//! that decides the shape of both its `connection` and `location` members.
//! Unrecognized types keep both members as raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::ExtraFields;
use super::union::{decode_as, tag};

/// Db2 connection details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Db2Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub username: String,
    pub password: String,
    pub database_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_base64: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Cloud Object Storage connection details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosConnection {
    pub resource_instance_id: String,
    pub url: String,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_url: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Connection member of a [`TrainingDataReference`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrainingDataReferenceConnection {
    Db2(Db2Connection),
    Cos(CosConnection),
    /// Types without a typed connection (`dataset`, `file_asset`) or unknown types.
    Unknown(Value),
}

/// Db2 table location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Db2Location {
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Cloud Object Storage object location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosLocation {
    pub bucket: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstlineheader: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Catalog data set location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetLocation {
    pub dataset_id: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Project file asset location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAssetLocation {
    pub file_path: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Location member of a [`TrainingDataReference`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TrainingDataReferenceLocation {
    Db2(Db2Location),
    Cos(CosLocation),
    Dataset(DatasetLocation),
    FileAsset(FileAssetLocation),
    Unknown(Value),
}

/// Reference to training data, dispatched on its `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingDataReference {
    #[serde(rename = "type")]
    pub reference_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<TrainingDataReferenceConnection>,
    pub location: TrainingDataReferenceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl TrainingDataReference {
    /// Db2 table reference.
    pub fn db2(connection: Db2Connection, location: Db2Location) -> Self {
        Self::with_parts(
            "db2",
            Some(TrainingDataReferenceConnection::Db2(connection)),
            TrainingDataReferenceLocation::Db2(location),
        )
    }

    /// Cloud Object Storage object reference.
    pub fn cos(connection: CosConnection, location: CosLocation) -> Self {
        Self::with_parts(
            "cos",
            Some(TrainingDataReferenceConnection::Cos(connection)),
            TrainingDataReferenceLocation::Cos(location),
        )
    }

    fn with_parts(
        reference_type: &str,
        connection: Option<TrainingDataReferenceConnection>,
        location: TrainingDataReferenceLocation,
    ) -> Self {
        Self {
            reference_type: reference_type.to_string(),
            connection,
            location,
            name: None,
            id: None,
            extra: ExtraFields::new(),
        }
    }

    fn decode_connection(
        reference_type: &str,
        value: Value,
    ) -> Result<TrainingDataReferenceConnection, serde_json::Error> {
        let map = match (reference_type, value) {
            ("db2" | "cos", Value::Object(map)) => map,
            (_, other) => return Ok(TrainingDataReferenceConnection::Unknown(other)),
        };
        match reference_type {
            "db2" => decode_as(map).map(TrainingDataReferenceConnection::Db2),
            _ => decode_as(map).map(TrainingDataReferenceConnection::Cos),
        }
    }

    fn decode_location(
        reference_type: &str,
        value: Value,
    ) -> Result<TrainingDataReferenceLocation, serde_json::Error> {
        let map = match (reference_type, value) {
            ("db2" | "cos" | "dataset" | "file_asset", Value::Object(map)) => map,
            (_, other) => return Ok(TrainingDataReferenceLocation::Unknown(other)),
        };
        match reference_type {
            "db2" => decode_as(map).map(TrainingDataReferenceLocation::Db2),
            "cos" => decode_as(map).map(TrainingDataReferenceLocation::Cos),
            "dataset" => decode_as(map).map(TrainingDataReferenceLocation::Dataset),
            _ => decode_as(map).map(TrainingDataReferenceLocation::FileAsset),
        }
    }

    fn from_map(mut map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        use serde::de::Error;

        let reference_type = tag(&map, "type")
            .map(str::to_string)
            .ok_or_else(|| serde_json::Error::missing_field("type"))?;
        map.remove("type");

        let connection = map
            .remove("connection")
            .map(|value| Self::decode_connection(&reference_type, value))
            .transpose()?;
        let location = map
            .remove("location")
            .ok_or_else(|| serde_json::Error::missing_field("location"))
            .and_then(|value| Self::decode_location(&reference_type, value))?;
        let name = optional_string(&mut map, "name")?;
        let id = optional_string(&mut map, "id")?;

        Ok(Self {
            reference_type,
            connection,
            location,
            name,
            id,
            extra: map,
        })
    }
}

fn optional_string(
    map: &mut Map<String, Value>,
    key: &'static str,
) -> Result<Option<String>, serde_json::Error> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

impl<'de> Deserialize<'de> for TrainingDataReference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::deserialize(deserializer)?;
        Self::from_map(map).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cos_reference() {
        let reference: TrainingDataReference = serde_json::from_value(json!({
            "type": "cos",
            "location": {"bucket": "training", "file_name": "credit_risk.csv", "firstlineheader": true},
            "connection": {
                "resource_instance_id": "crn:v1",
                "url": "https://s3.us.cloud-object-storage.appdomain.cloud",
                "api_key": "key",
                "iam_url": "https://iam.cloud.ibm.com/oidc/token"
            }
        }))
        .unwrap();

        assert!(matches!(
            reference.connection,
            Some(TrainingDataReferenceConnection::Cos(_))
        ));
        match reference.location {
            TrainingDataReferenceLocation::Cos(location) => {
                assert_eq!(location.bucket, "training");
                assert_eq!(location.firstlineheader, Some(true));
            }
            other => panic!("Expected COS location, got {other:?}"),
        }
    }

    #[test]
    fn test_db2_reference_missing_required_member() {
        let result: Result<TrainingDataReference, _> = serde_json::from_value(json!({
            "type": "db2",
            "location": {"schema_name": "S"},
            "connection": {"username": "u", "password": "p", "database_name": "BLUDB"}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_dataset_reference_keeps_raw_connection() {
        let reference: TrainingDataReference = serde_json::from_value(json!({
            "type": "dataset",
            "location": {"dataset_id": "ds-9"},
            "connection": {"project_id": "p-1"}
        }))
        .unwrap();
        assert!(matches!(
            reference.location,
            TrainingDataReferenceLocation::Dataset(_)
        ));
        assert_eq!(
            reference.connection,
            Some(TrainingDataReferenceConnection::Unknown(json!({"project_id": "p-1"})))
        );
    }

    #[test]
    fn test_unknown_type_round_trips() {
        let original = json!({
            "type": "hive",
            "location": {"table": "t"},
            "connection": {"jdbc_url": "jdbc:hive2://h"},
            "name": "hive training",
            "sampling": 0.5
        });
        let reference: TrainingDataReference = serde_json::from_value(original.clone()).unwrap();
        assert_eq!(reference.reference_type, "hive");
        assert!(matches!(
            reference.location,
            TrainingDataReferenceLocation::Unknown(_)
        ));
        assert_eq!(reference.extra.get("sampling"), Some(&json!(0.5)));
        assert_eq!(serde_json::to_value(&reference).unwrap(), original);
    }

    #[test]
    fn test_missing_type_is_error() {
        let result: Result<TrainingDataReference, _> =
            serde_json::from_value(json!({"location": {"bucket": "b", "file_name": "f"}}));
        assert!(result.is_err());
    }
}
