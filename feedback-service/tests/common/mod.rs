//! Shared test harness: spawns the service on a random port with a mock
//! provider behind the generation seam.

use feedback_service::config::FeedbackConfig;
use feedback_service::services::providers::TextProvider;
use feedback_service::services::providers::mock::MockTextProvider;
use feedback_service::startup::Application;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
    pub provider: Arc<MockTextProvider>,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(provider: MockTextProvider) -> Self {
        std::env::set_var("APP__PORT", "0");
        std::env::set_var("GOOGLE_API_KEY", "test-api-key");

        let config = FeedbackConfig::load().expect("Failed to load config");

        let provider = Arc::new(provider);
        let text_provider: Arc<dyn TextProvider> = provider.clone();

        let app = Application::build_with_provider(config, text_provider)
            .await
            .expect("Failed to build application");
        let address = format!("http://localhost:{}", app.port());

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            address,
            provider,
            client: reqwest::Client::new(),
        }
    }

    pub async fn post_feedback(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/feedback", self.address))
            .json(body)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/health", self.address))
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .expect("Failed to send request")
    }
}
