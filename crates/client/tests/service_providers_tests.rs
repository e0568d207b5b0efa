//! Service provider endpoint tests.
//!
//! # Invariants
//! - Credentials decode by the sibling `service_type`
//! - Unrecognized service types keep their credentials as a raw object
//! - Credentials sent on create serialize back to the object the service expects

mod common;

use common::*;
use openscale_client::{
    AddServiceProviderOptions, GetServiceProviderOptions, ListServiceProvidersOptions,
    MlCredentials, SageMakerCredentials,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};

#[tokio::test]
async fn test_get_service_provider_decodes_wml_cloud_credentials() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("service_providers/get_service_provider_wml.json");

    Mock::given(method("GET"))
        .and(path("/v2/service_providers/sp-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let response = client
        .get_service_provider(&GetServiceProviderOptions::new("sp-1"))
        .await
        .unwrap();

    let entity = response.result.entity;
    assert_eq!(entity.service_type, "watson_machine_learning");
    match entity.credentials {
        Some(MlCredentials::WmlCloud(creds)) => {
            assert_eq!(creds.instance_id, "wml-instance-1");
            assert_eq!(creds.apikey.as_deref(), Some("redacted"));
            assert_eq!(creds.extra.get("region"), Some(&json!("us-south")));
        }
        other => panic!("expected WML cloud credentials, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_service_providers_mixed_credentials() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("service_providers/list_service_providers.json");

    Mock::given(method("GET"))
        .and(path("/v2/service_providers"))
        .and(query_param("show_deleted", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListServiceProvidersOptions::new().show_deleted(false);
    let providers = client
        .list_service_providers(&options)
        .await
        .unwrap()
        .into_result()
        .service_providers;

    assert_eq!(providers.len(), 3);
    assert!(matches!(
        providers[0].entity.credentials,
        Some(MlCredentials::SageMaker(_))
    ));
    assert!(matches!(
        providers[1].entity.credentials,
        Some(MlCredentials::Custom(_))
    ));
    match &providers[2].entity.credentials {
        Some(MlCredentials::Unknown(raw)) => {
            assert_eq!(raw.get("client_key"), Some(&json!("k")));
        }
        other => panic!("expected raw credentials, got {other:?}"),
    }
}

#[tokio::test]
async fn test_add_service_provider_body() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("service_providers/get_service_provider_wml.json");

    Mock::given(method("POST"))
        .and(path("/v2/service_providers"))
        .and(body_partial_json(json!({
            "name": "SageMaker",
            "service_type": "amazon_sagemaker",
            "credentials": {
                "access_key_id": "AKIA",
                "secret_access_key": "secret",
                "region": "us-east-1"
            },
            "operational_space_id": "production"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let credentials = MlCredentials::SageMaker(SageMakerCredentials {
        access_key_id: "AKIA".to_string(),
        secret_access_key: "secret".to_string(),
        region: Some("us-east-1".to_string()),
        extra: Default::default(),
    });
    let options = AddServiceProviderOptions::new("SageMaker", "amazon_sagemaker", credentials)
        .operational_space_id("production");
    let response = client.add_service_provider(&options).await.unwrap();

    assert_eq!(response.status, 201);
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("headers").is_none());
    assert!(body.get("description").is_none());
}

#[tokio::test]
async fn test_add_service_provider_requires_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let credentials = MlCredentials::Unknown(Default::default());
    let options = AddServiceProviderOptions::new("", "custom_machine_learning", credentials);
    let err = client.add_service_provider(&options).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("name")));
}
