//! Subscription endpoint tests.
//!
//! # Invariants
//! - Nested training data references decode by their `type`
//! - `subscriptions_tables` always sends `dataset_type` and only sends a body when a schema is given

mod common;

use common::*;
use openscale_client::{
    AddSubscriptionOptions, Asset, AssetDeployment, DeleteSubscriptionOptions,
    GetSubscriptionOptions, ListSubscriptionsOptions, SparkStruct, SparkStructField,
    SubscriptionsSchemasOptions, SubscriptionsTablesOptions, TrainingDataReferenceLocation,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_get_subscription() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("subscriptions/get_subscription.json");

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions/sub-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let subscription = client
        .get_subscription(&GetSubscriptionOptions::new("sub-1"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(subscription.entity.data_mart_id, "dm-123");
    assert_eq!(subscription.entity.asset.problem_type.as_deref(), Some("binary"));
    let properties = subscription.entity.asset_properties.unwrap();
    assert_eq!(properties.label_column.as_deref(), Some("Risk"));
    let reference = properties.training_data_reference.unwrap();
    assert_eq!(reference.reference_type, "cos");
    match reference.location {
        TrainingDataReferenceLocation::Cos(location) => {
            assert_eq!(location.bucket, "training");
            assert_eq!(location.file_name, "credit.csv");
        }
        other => panic!("expected COS location, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_subscriptions_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/subscriptions"))
        .and(query_param("data_mart_id", "dm-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"subscriptions": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListSubscriptionsOptions::new().data_mart_id("dm-123");
    let response = client.list_subscriptions(&options).await.unwrap();

    assert!(response.result.subscriptions.is_empty());
}

#[tokio::test]
async fn test_add_subscription_body() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("subscriptions/get_subscription.json");

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions"))
        .and(body_json(json!({
            "data_mart_id": "dm-123",
            "service_provider_id": "sp-1",
            "asset": {"asset_id": "asset-1", "asset_type": "model"},
            "deployment": {"deployment_id": "dep-1"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = AddSubscriptionOptions::new(
        "dm-123",
        "sp-1",
        Asset::new("asset-1", "model"),
        AssetDeployment::new("dep-1"),
    );
    let response = client.add_subscription(&options).await.unwrap();

    assert_eq!(response.result.metadata.id, "sub-1");
}

#[tokio::test]
async fn test_subscriptions_schemas() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("subscriptions/subscriptions_schemas.json");

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions/sub-1/schemas"))
        .and(body_json(json!({
            "input_data": [{"CheckingStatus": "0_to_200", "LoanDuration": 12}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let row = json!({"CheckingStatus": "0_to_200", "LoanDuration": 12});
    let options = SubscriptionsSchemasOptions::new("sub-1")
        .input_data(vec![row.as_object().unwrap().clone()]);
    let schema = client.subscriptions_schemas(&options).await.unwrap().result;

    assert_eq!(schema.struct_type, "struct");
    assert_eq!(schema.fields.len(), 3);
    assert_eq!(schema.fields[1].field_type, json!("integer"));
    assert!(!schema.fields[2].nullable);
}

#[tokio::test]
async fn test_subscriptions_tables_with_schema() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("data_sets/get_data_set.json");

    Mock::given(method("POST"))
        .and(path("/v2/subscriptions/sub-1/tables"))
        .and(query_param("dataset_type", "feedback"))
        .and(query_param("force", "true"))
        .and(body_json(json!({
            "type": "struct",
            "fields": [{"name": "Risk", "type": "string", "nullable": false}]
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let schema = SparkStruct::new(vec![SparkStructField::new("Risk", "string", false)]);
    let options = SubscriptionsTablesOptions::new("sub-1", "feedback")
        .force(true)
        .schema(schema);
    let response = client.subscriptions_tables(&options).await.unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.result.entity.data_set_type, "payload_logging");
}

#[tokio::test]
async fn test_subscriptions_tables_requires_dataset_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .subscriptions_tables(&SubscriptionsTablesOptions::new("sub-1", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("dataset_type")));
}

#[tokio::test]
async fn test_delete_subscription_with_force() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v2/subscriptions/sub-1"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = DeleteSubscriptionOptions::new("sub-1").force(true);
    let response = client.delete_subscription(&options).await.unwrap();

    assert_eq!(response.status, 202);
}
