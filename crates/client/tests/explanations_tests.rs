//! Explanation task endpoint tests.

mod common;

use common::*;
use openscale_client::{
    AddExplanationTasksOptions, ExplanationsItem, GetExplanationTaskOptions,
    ListExplanationTasksOptions, StatusState,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_add_explanation_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/explanation_tasks"))
        .and(body_json(json!({
            "scoring_ids": ["score-1", "score-2"],
            "explanation_types": ["lime"],
            "subscription_id": "sub-1"
        })))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "metadata": {"explanation_task_ids": ["et-1", "et-2"], "created_by": "IBMid-550001"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = AddExplanationTasksOptions::new()
        .scoring_ids(vec!["score-1".to_string(), "score-2".to_string()])
        .explanation_types(vec!["lime".to_string()])
        .subscription_id("sub-1");
    let response = client
        .add_explanation_tasks(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(response.metadata.explanation_task_ids, vec!["et-1", "et-2"]);
}

#[tokio::test]
async fn test_list_explanation_tasks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/explanation_tasks"))
        .and(query_param("subscription_id", "sub-1"))
        .and(query_param("limit", "10"))
        .and(query_param("status", "finished"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "explanation_fields": ["explanation_task_id", "status"],
            "explanation_values": [["et-1", "finished"]],
            "total_count": 1,
            "limit": 10,
            "offset": 0
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = ListExplanationTasksOptions::new("sub-1")
        .limit(10)
        .status("finished");
    let tasks = client
        .list_explanation_tasks(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(tasks.explanation_fields.len(), 2);
    assert_eq!(tasks.explanation_values[0][0], json!("et-1"));
    assert_eq!(tasks.page.total_count, Some(1));
}

#[tokio::test]
async fn test_list_explanation_tasks_requires_subscription() {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    let err = client
        .list_explanation_tasks(&ListExplanationTasksOptions::new(""))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(ref m) if m.contains("subscription_id")));
}

#[tokio::test]
async fn test_get_explanation_task_variants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/explanation_tasks/et-1"))
        .and(query_param("subscription_id", "sub-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("explanations/get_explanation_task.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let options = GetExplanationTaskOptions::new("et-1").subscription_id("sub-1");
    let task = client
        .get_explanation_task(&options)
        .await
        .unwrap()
        .into_result();

    assert_eq!(task.metadata.explanation_task_id, "et-1");
    assert_eq!(task.entity.status.state, StatusState::Finished);

    let explanations = &task.entity.explanations;
    assert_eq!(explanations.len(), 3);
    assert!(matches!(explanations[0], ExplanationsItem::Lime(_)));
    assert!(matches!(explanations[1], ExplanationsItem::Contrastive(_)));
    assert!(matches!(explanations[2], ExplanationsItem::Unknown(_)));
    assert_eq!(explanations[2].explanation_type(), Some("shap"));

    if let ExplanationsItem::Lime(lime) = &explanations[0] {
        assert_eq!(lime.predictions.len(), 1);
    }
}
