//! Summarize API endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::SummarizeResponse;
use crate::summary;
use crate::AppState;

/// POST /api/summarize - Summarize pending todos and post them to Slack.
pub async fn summarize_todos(State(state): State<AppState>) -> ApiResult<Json<SummarizeResponse>> {
    let response = summary::summarize_pending(&state.repo, &state.http, &state.config)
        .await
        .inspect_err(|e| tracing::error!("Error in summarize endpoint: {}", e))?;
    Ok(Json(response))
}
