//! Drift archive endpoint tests.

mod common;

use common::*;
use openscale_client::{DriftArchiveOptions, UploadDriftArchiveOptions};
use wiremock::matchers::{body_bytes, header, method, path, query_param};

const ARCHIVE_PATH: &str = "/v2/monitoring_services/drift/monitor_instances/mi-1/archive";

#[tokio::test]
async fn test_drift_archive_head() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path(ARCHIVE_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client
        .head_drift_archive(&DriftArchiveOptions::new("mi-1"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("accept").is_none());
}

#[tokio::test]
async fn test_download_drift_archive() {
    let mock_server = MockServer::start().await;
    let archive = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0x01];

    Mock::given(method("GET"))
        .and(path(ARCHIVE_PATH))
        .and(header("Accept", "application/octet-stream"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/octet-stream")
                .set_body_bytes(archive.clone()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let bytes = client
        .download_drift_archive(&DriftArchiveOptions::new("mi-1"))
        .await
        .unwrap()
        .into_result();

    assert_eq!(bytes, archive);
}

#[tokio::test]
async fn test_upload_drift_archive() {
    let mock_server = MockServer::start().await;
    let archive = b"PK\x03\x04drift".to_vec();

    Mock::given(method("POST"))
        .and(path(ARCHIVE_PATH))
        .and(header("Content-Type", "application/octet-stream"))
        .and(query_param("archive_name", "credit-drift"))
        .and(query_param("enable_data_drift", "true"))
        .and(query_param("enable_model_drift", "false"))
        .and(body_bytes(archive.clone()))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = UploadDriftArchiveOptions::new("mi-1", archive)
        .archive_name("credit-drift")
        .enable_data_drift(true)
        .enable_model_drift(false);
    let response = client.upload_drift_archive(&options).await.unwrap();

    assert_eq!(response.status, 202);
}

#[tokio::test]
async fn test_upload_drift_archive_requires_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client
        .upload_drift_archive(&UploadDriftArchiveOptions::new("mi-1", Vec::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("body")));
}
