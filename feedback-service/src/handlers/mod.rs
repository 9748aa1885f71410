//! HTTP handlers for the feedback relay.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use validator::Validate;

use crate::dtos::{FeedbackRequest, FeedbackResponse};
use crate::services::extract::{FALLBACK_FEEDBACK, extract_recommendations};
use crate::services::prompt::build_prompt;
use crate::startup::AppState;
use service_core::error::AppError;

/// Maximum number of recommendations returned to the caller.
const MAX_FEEDBACK_ITEMS: usize = 4;

/// `POST /feedback`: validate, prompt, generate, normalize, respond.
///
/// Validation failures cost zero upstream calls. An empty extraction is not
/// an error; the fixed fallback list is served instead.
pub async fn post_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::BadRequest(anyhow::anyhow!("Invalid payload: {}", rejection.body_text()))
    })?;
    request.validate()?;

    let prompt = build_prompt(&request);

    let raw = state.text_provider.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "Text generation failed");
        AppError::Upstream(anyhow::anyhow!("Error generating feedback"))
    })?;

    let mut feedback = extract_recommendations(&raw);
    if feedback.is_empty() {
        tracing::warn!(
            raw_len = raw.len(),
            "No recommendations extracted from model output, serving fallback"
        );
        feedback = FALLBACK_FEEDBACK.iter().map(|s| s.to_string()).collect();
    }
    feedback.truncate(MAX_FEEDBACK_ITEMS);

    Ok(Json(FeedbackResponse { feedback }))
}

/// `GET /health`: always 200, no dependencies checked.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "ok": true,
        "service": "feedback-service",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
