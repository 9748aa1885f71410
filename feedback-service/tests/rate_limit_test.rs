//! Rate limit integration test.
//!
//! Lives in its own test binary: it narrows the rate-limit window via
//! environment variables, which must not leak into the other suites.

mod common;

use common::TestApp;
use feedback_service::services::providers::mock::MockTextProvider;
use serde_json::json;

#[tokio::test]
async fn feedback_route_is_rate_limited_but_health_is_not() {
    std::env::set_var("RATE_LIMIT_MAX_REQUESTS", "3");
    std::env::set_var("RATE_LIMIT_WINDOW_SECONDS", "60");

    let app = TestApp::spawn(MockTextProvider::with_response("[\"tip\"]")).await;
    let body = json!({ "name": "Ana", "average": 12, "status": "Approved" });

    for _ in 0..3 {
        let response = app.post_feedback(&body).await;
        assert_eq!(response.status(), 200);
    }

    let limited = app.post_feedback(&body).await;
    assert_eq!(limited.status(), 429);
    assert!(limited.headers().get("retry-after").is_some());

    // The gate guards /feedback only.
    let health = app.get_health().await;
    assert_eq!(health.status(), 200);
}
