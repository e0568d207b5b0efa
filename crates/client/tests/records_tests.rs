//! Data set record endpoint tests.
//!
//! # Invariants
//! - Structured payloads are sent as `application/json`
//! - Raw bodies carry `Content-Type` only when the caller supplied one
//! - `records_list` decodes the `dict` and `list` layouts from the payload itself
//! - Asynchronous uploads surface the `Location` header

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use openscale_client::{
    DatasetRecordsPayloadItem, GetRecordOptions, GetRecordsRequestOptions, JsonPatchOperation,
    PatchRecordRequest, RecordsAddOptions, RecordsListOptions, RecordsListResponse,
    RecordsPatchOptions, RecordsQueryOptions, StatusState, UpdateRecordOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};

#[tokio::test]
async fn test_records_add_structured_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/data_sets/ds-1/records"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([
            {"request": {"fields": ["a"], "values": [[1]]}, "response": {"predictions": []}},
            {"LoanDuration": 12}
        ])))
        .respond_with(
            ResponseTemplate::new(202)
                .insert_header("Location", "/v2/data_sets/ds-1/requests?request_id=req-1")
                .set_body_json(json!({"state": "pending"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let scoring: DatasetRecordsPayloadItem = serde_json::from_value(json!({
        "request": {"fields": ["a"], "values": [[1]]},
        "response": {"predictions": []}
    }))
    .unwrap();
    assert!(matches!(scoring, DatasetRecordsPayloadItem::ScoringPayload(_)));
    let plain = json!({"LoanDuration": 12}).as_object().unwrap().clone();

    let options = RecordsAddOptions::new("ds-1")
        .request_body(vec![scoring, DatasetRecordsPayloadItem::Object(plain)]);
    let response = client.records_add(&options).await.unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(
        response.location(),
        Some("/v2/data_sets/ds-1/requests?request_id=req-1")
    );
    assert_eq!(response.result.unwrap().state, StatusState::Pending);
}

#[tokio::test]
async fn test_records_add_csv_body() {
    let mock_server = MockServer::start().await;
    let csv = load_fixture_string("records/payload.csv");

    Mock::given(method("POST"))
        .and(path("/v2/data_sets/ds-1/records"))
        .and(header("Content-Type", "text/csv"))
        .and(query_param("header", "true"))
        .and(query_param("delimiter", ","))
        .and(body_string(csv.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RecordsAddOptions::new("ds-1")
        .body(csv.into_bytes())
        .content_type("text/csv")
        .header(true)
        .delimiter(",");
    let response = client.records_add(&options).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_records_add_raw_body_without_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/data_sets/ds-1/records"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RecordsAddOptions::new("ds-1").body(b"[{\"a\": 1}]".to_vec());
    client.records_add(&options).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("content-type").is_none());
    assert_eq!(requests[0].body, b"[{\"a\": 1}]".to_vec());
}

#[tokio::test]
async fn test_records_add_requires_a_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .records_add(&RecordsAddOptions::new("ds-1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_records_list_dict_layout() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("records/list_records_dict.json");

    Mock::given(method("GET"))
        .and(path("/v2/data_sets/ds-1/records"))
        .and(query_param("start", "2024-03-01T00:00:00Z"))
        .and(query_param("annotations", "feedback,bias"))
        .and(query_param("include_total_count", "true"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RecordsListOptions::new("ds-1")
        .start(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        .annotations(vec!["feedback".to_string(), "bias".to_string()])
        .include_total_count(true)
        .limit(2);
    let response = client.records_list(&options).await.unwrap();

    match response.result {
        RecordsListResponse::Dict(collection) => {
            assert_eq!(collection.records.len(), 2);
            assert_eq!(collection.page.total_count, Some(250));
            assert_eq!(
                collection.records[0].entity.values.get("prediction"),
                Some(&json!("No Risk"))
            );
        }
        other => panic!("expected dict layout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_records_list_list_layout() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("records/list_records_list.json");

    Mock::given(method("GET"))
        .and(path("/v2/data_sets/ds-1/records"))
        .and(query_param("format", "list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RecordsListOptions::new("ds-1").format("list");
    let result = client.records_list(&options).await.unwrap().result;

    assert_eq!(result.len(), 1);
    match result {
        RecordsListResponse::List(collection) => {
            let values = &collection.records[0].entity.values;
            assert_eq!(values.fields, vec!["scoring_id", "LoanDuration", "prediction"]);
            assert_eq!(values.values.len(), 2);
        }
        other => panic!("expected list layout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_record_encodes_path_segments() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data_sets/ds-1/records/r%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"id": "r 1"},
            "entity": {"values": {"a": 1}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let record = client
        .get_record(&GetRecordOptions::new("ds-1", "r 1"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(record.metadata.unwrap().id, "r 1");
}

#[tokio::test]
async fn test_get_record_empty_record_id_never_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .get_record(&GetRecordOptions::new("ds-1", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("record_id")));
}

#[tokio::test]
async fn test_records_patch_and_update_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v2/data_sets/ds-1/records"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!([{
            "record_id": "r-1",
            "patch_document": [{"op": "replace", "path": "/prediction", "value": "Risk"}]
        }])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v2/data_sets/ds-1/records/r-1"))
        .and(header("Content-Type", "application/json-patch+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metadata": {"id": "r-1"},
            "entity": {"values": {"prediction": "Risk"}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let patch = vec![JsonPatchOperation::replace("/prediction", json!("Risk"))];

    let batch = RecordsPatchOptions::new(
        "ds-1",
        vec![PatchRecordRequest {
            record_id: "r-1".to_string(),
            patch_document: patch.clone(),
            record_timestamp: None,
        }],
    );
    let response = client.records_patch(&batch).await.unwrap();
    assert!(response.result.is_none());

    let single = UpdateRecordOptions::new("ds-1", "r-1", patch);
    let record = client.update_record(&single).await.unwrap().into_result();
    assert_eq!(record.entity.values.get("prediction"), Some(&json!("Risk")));
}

#[tokio::test]
async fn test_records_query_across_data_sets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data_set_records"))
        .and(query_param("data_set_type", "payload_logging"))
        .and(query_param("record_id", "s-1,s-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data_set_records": [{
                "data_set": {"data_set_id": "ds-1", "type": "payload_logging"},
                "records": [{"entity": {"values": {"scoring_id": "s-1"}}}]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = RecordsQueryOptions::new("payload_logging")
        .record_id(vec!["s-1".to_string(), "s-2".to_string()]);
    let result = client.records_query(&options).await.unwrap().result;

    assert_eq!(result.data_set_records.len(), 1);
    assert_eq!(result.data_set_records[0].data_set.data_set_id, "ds-1");
    assert_eq!(result.data_set_records[0].records.len(), 1);
}

#[tokio::test]
async fn test_get_records_request_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/data_sets/ds-1/requests"))
        .and(query_param("request_id", "req-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"state": "active"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let status = client
        .get_records_request(&GetRecordsRequestOptions::new("ds-1", "req-1"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(status.state, StatusState::Active);
}
