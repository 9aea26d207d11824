use org_todoist::api::ApiClient;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sync_response() -> serde_json::Value {
    serde_json::json!({
        "sync_token": "TnYUZEpuzf2FMA9qzyY3j4xky6dXiYejmSO85S5paZ_a9y1FI85mBbIWZGpW",
        "full_sync": true,
        "projects": [
            {"id": 1, "parent_id": null, "name": "Inbox"},
            {"id": 2, "parent_id": 1, "name": "Errands"}
        ],
        "items": [
            {
                "id": 10, "project_id": 1, "parent_id": null, "content": "Buy milk",
                "due": {"date": "2024-03-01", "timezone": null, "string": "Mar 1",
                        "lang": "en", "is_recurring": false},
                "in_history": 0, "is_deleted": 0
            },
            {
                "id": 11, "project_id": 1, "parent_id": 10, "content": "Oat milk",
                "due": null, "in_history": 0, "is_deleted": 0
            }
        ]
    })
}

#[tokio::test]
async fn test_sync_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sync/v8/sync"))
        .and(header("Authorization", "Bearer test_token"))
        .and(body_string_contains("sync_token=*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sync_response()))
        .mount(&mock_server)
        .await;

    let uri = format!("{}/sync/v8", mock_server.uri());

    // Run blocking client in a blocking context
    let result = tokio::task::spawn_blocking(move || {
        let client = ApiClient::new("test_token".into(), Some(uri)).unwrap();
        client.sync()
    })
    .await
    .unwrap();

    let state = result.unwrap();
    assert_eq!(state.projects.len(), 2);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].parent_id.as_ref().unwrap().as_str(), "10");
    assert_eq!(state.items[0].due.as_ref().unwrap().date, "2024-03-01");
}

#[tokio::test]
async fn test_api_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sync"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let client = ApiClient::new("bad_token".into(), Some(uri)).unwrap();
        client.sync()
    })
    .await
    .unwrap();

    match result {
        Err(org_todoist::Error::Api {
            status, message, ..
        }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden");
        }
        other => panic!("Expected API error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_missing_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!({
        "projects": [{"id": 1, "name": "Inbox"}],
        "items": [{"id": 10, "project_id": 1, "in_history": 0, "is_deleted": 0}]
    });

    Mock::given(method("POST"))
        .and(path("/sync"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&mock_server)
        .await;

    let uri = mock_server.uri();

    let result = tokio::task::spawn_blocking(move || {
        let client = ApiClient::new("token".into(), Some(uri)).unwrap();
        client.sync()
    })
    .await
    .unwrap();

    let err = result.unwrap_err();
    assert!(matches!(err, org_todoist::Error::Parse(_)));
    assert_eq!(err.exit_code(), 5);
    assert!(err.to_string().contains("content"));
}
