//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock text provider with canned output and a call counter.
pub struct MockTextProvider {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    /// A provider that always returns the given raw text.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider whose every call fails.
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::ApiError(
                "Mock provider configured to fail".to_string(),
            )),
        }
    }
}
