//! Data set endpoint tests.

mod common;

use common::*;
use openscale_client::{
    AddDataSetOptions, DeleteDataSetOptions, GetDataSetOptions, JsonPatchOperation,
    ListDataSetsOptions, PatchDataSetOptions, SparkStruct, SparkStructField, Target,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};

#[tokio::test]
async fn test_get_data_set() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("data_sets/get_data_set.json");

    Mock::given(method("GET"))
        .and(path("/v2/data_sets/ds-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let data_set = client
        .get_data_set(&GetDataSetOptions::new("ds-1"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(data_set.entity.data_set_type, "payload_logging");
    assert_eq!(data_set.entity.target, Target::new("subscription", "sub-1"));
    assert_eq!(data_set.entity.data_schema.fields.len(), 2);
}

#[tokio::test]
async fn test_list_data_sets_by_target() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("data_sets/get_data_set.json");

    Mock::given(method("GET"))
        .and(path("/v2/data_sets"))
        .and(query_param("target.target_id", "sub-1"))
        .and(query_param("target.target_type", "subscription"))
        .and(query_param("type", "payload_logging"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data_sets": [fixture]})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListDataSetsOptions::new()
        .target_target_id("sub-1")
        .target_target_type("subscription")
        .data_set_type("payload_logging");
    let data_sets = client.list_data_sets(&options).await.unwrap().result;

    assert_eq!(data_sets.data_sets.len(), 1);
}

#[tokio::test]
async fn test_add_data_set() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("data_sets/get_data_set.json");

    Mock::given(method("POST"))
        .and(path("/v2/data_sets"))
        .and(body_partial_json(json!({
            "data_mart_id": "dm-123",
            "name": "payload logging",
            "type": "payload_logging",
            "target": {"target_type": "subscription", "target_id": "sub-1"},
            "data_schema": {"type": "struct", "fields": [{"name": "scoring_id", "type": "string", "nullable": false}]}
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = AddDataSetOptions::new(
        "dm-123",
        "payload logging",
        "payload_logging",
        Target::new("subscription", "sub-1"),
        SparkStruct::new(vec![SparkStructField::new("scoring_id", "string", false)]),
    );
    let response = client.add_data_set(&options).await.unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.result.metadata.id, "ds-1");
}

#[tokio::test]
async fn test_patch_and_delete_data_set() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("data_sets/get_data_set.json");

    Mock::given(method("PATCH"))
        .and(path("/v2/data_sets/ds-1"))
        .and(header("Content-Type", "application/json-patch+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/data_sets/ds-1"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let patch = PatchDataSetOptions::new(
        "ds-1",
        vec![JsonPatchOperation::replace("/description", json!("renamed"))],
    );
    client.patch_data_set(&patch).await.unwrap();

    let response = client
        .delete_data_set(&DeleteDataSetOptions::new("ds-1"))
        .await
        .unwrap();
    assert_eq!(response.status, 202);
}

#[tokio::test]
async fn test_patch_data_set_requires_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .patch_data_set(&PatchDataSetOptions::new("ds-1", vec![]))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("json_patch_operation")));
}
