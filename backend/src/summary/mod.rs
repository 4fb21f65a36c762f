//! Summarize-and-notify pipeline.
//!
//! Reads pending todos, asks the completion API for a summary, and posts it to Slack.
//! Each step returns early on failure; nothing is retried.

mod completion;
mod message;
mod prompt;
mod webhook;

pub use completion::*;
pub use message::*;
pub use prompt::*;
pub use webhook::*;

use reqwest::Client;

use crate::config::Config;
use crate::db::Repository;
use crate::errors::AppError;
use crate::models::SummarizeResponse;

/// Run the whole pipeline and return the summary that was sent.
pub async fn summarize_pending(
    repo: &Repository,
    http: &Client,
    config: &Config,
) -> Result<SummarizeResponse, AppError> {
    let api_key = config.openai_api_key.as_deref().ok_or_else(|| {
        tracing::warn!("Summarize requested but OPENAI_API_KEY is not set");
        AppError::Configuration("OpenAI API key is not configured".to_string())
    })?;
    let webhook_url = config.slack_webhook_url.as_deref().ok_or_else(|| {
        tracing::warn!("Summarize requested but SLACK_WEBHOOK_URL is not set");
        AppError::Configuration("Slack webhook URL not configured".to_string())
    })?;

    let todos = repo.list_pending_todos().await?;
    if todos.is_empty() {
        return Err(AppError::Validation(
            "No pending todos to summarize".to_string(),
        ));
    }

    let prompt = build_prompt(&todos);
    let summary = CompletionClient::new(http, &config.openai_api_base, api_key)
        .complete(SYSTEM_PROMPT, &prompt)
        .await?;

    let message = build_summary_message(summary.as_deref(), todos.len());
    post_message(http, webhook_url, &message).await?;

    tracing::info!("Sent summary of {} pending todos to Slack", todos.len());

    Ok(SummarizeResponse {
        success: true,
        summary,
    })
}
