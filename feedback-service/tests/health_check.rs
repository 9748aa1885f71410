//! Health endpoint integration tests.

mod common;

use common::TestApp;
use feedback_service::services::providers::mock::MockTextProvider;

#[tokio::test]
async fn health_check_returns_ok_without_touching_the_provider() {
    let app = TestApp::spawn(MockTextProvider::failing()).await;

    let response = app.get_health().await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "feedback-service");

    // /health never checks dependencies.
    assert_eq!(app.provider.call_count(), 0);
}
