use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pushkind_sales::settings_client::{SettingsClient, SettingsError, SettingsGateway};

const FUNCTION: &str = "/functions/v1/google-sheets-update";

fn client(server: &MockServer) -> SettingsClient {
    SettingsClient::new(&server.uri(), "anon-key", Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn update_password_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FUNCTION))
        .and(query_param("action", "update-password"))
        .and(header("authorization", "Bearer anon-key"))
        .and(header("apikey", "anon-key"))
        .and(body_json(json!({
            "currentPassword": "oldpass",
            "newPassword": "secret1"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Password updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = client(&server)
        .update_password("oldpass", "secret1")
        .await
        .unwrap();

    assert!(confirmation.success);
    assert_eq!(confirmation.message.as_deref(), Some("Password updated"));
}

#[tokio::test]
async fn merge_reps_posts_rep_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(FUNCTION))
        .and(query_param("action", "merge-reps"))
        .and(body_json(json!({"fromRepName": "Ann", "toRepName": "Anna"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "message": "Merged 3 rows"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let confirmation = client(&server).merge_reps("Ann", "Anna").await.unwrap();

    assert_eq!(confirmation.message.as_deref(), Some("Merged 3 rows"));
}

#[tokio::test]
async fn remote_error_message_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Current password is incorrect"})),
        )
        .mount(&server)
        .await;

    let result = client(&server).update_password("wrong", "secret1").await;

    match result {
        Err(SettingsError::Remote(message)) => assert_eq!(message, "Current password is incorrect"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn missing_error_body_uses_fallback_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = client(&server).merge_reps("Ann", "Anna").await;

    match result {
        Err(SettingsError::Remote(message)) => assert_eq!(message, "Failed to merge reps"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn empty_success_body_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let confirmation = client(&server).merge_reps("Ann", "Anna").await.unwrap();

    assert!(confirmation.success);
    assert!(confirmation.message.is_none());
}
