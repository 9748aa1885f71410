//! Text generation provider abstraction.
//!
//! A narrow seam over the generative backend so the deterministic mock can
//! stand in for Gemini in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate raw text for the given prompt.
    ///
    /// An empty candidate is not an error; callers decide what an empty
    /// response means.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
