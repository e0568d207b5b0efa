//! Integrated system endpoint tests.

mod common;

use common::*;
use openscale_client::{
    AddIntegratedSystemOptions, DeleteIntegratedSystemOptions, GetIntegratedSystemOptions,
    ListIntegratedSystemsOptions,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

fn open_pages() -> serde_json::Value {
    json!({
        "metadata": {"id": "is-1"},
        "entity": {
            "name": "OpenPages",
            "type": "open_pages",
            "description": "Model risk governance",
            "credentials": {"url": "https://openpages.example.com", "username": "op", "password": "p"}
        }
    })
}

#[tokio::test]
async fn test_list_integrated_systems_by_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/integrated_systems"))
        .and(query_param("type", "open_pages,slack"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"integrated_systems": [open_pages()]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListIntegratedSystemsOptions::new()
        .system_type(vec!["open_pages".to_string(), "slack".to_string()]);
    let systems = client
        .list_integrated_systems(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(systems.integrated_systems.len(), 1);
    assert_eq!(systems.integrated_systems[0].entity.system_type, "open_pages");
}

#[tokio::test]
async fn test_add_get_delete_integrated_system() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/integrated_systems"))
        .and(body_json(json!({
            "name": "OpenPages",
            "type": "open_pages",
            "description": "Model risk governance",
            "credentials": {"url": "https://openpages.example.com", "username": "op", "password": "p"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(open_pages()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/integrated_systems/is-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(open_pages()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v2/integrated_systems/is-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let credentials = json!({"url": "https://openpages.example.com", "username": "op", "password": "p"})
        .as_object()
        .unwrap()
        .clone();
    let options = AddIntegratedSystemOptions::new(
        "OpenPages",
        "open_pages",
        "Model risk governance",
        credentials,
    );
    let created = client.add_integrated_system(&options).await.unwrap();
    assert_eq!(created.status, 201);

    let system = client
        .get_integrated_system(&GetIntegratedSystemOptions::new("is-1"))
        .await
        .unwrap()
        .into_result();
    let credentials = system.entity.credentials.unwrap();
    assert_eq!(credentials.get("username"), Some(&json!("op")));

    let deleted = client
        .delete_integrated_system(&DeleteIntegratedSystemOptions::new("is-1"))
        .await
        .unwrap();
    assert_eq!(deleted.status, 204);
}
