//! Slack incoming-webhook delivery.

use reqwest::Client;
use serde_json::Value;

use crate::errors::AppError;

/// POST a JSON message to the webhook; a non-success status carries the response text.
pub async fn post_message(http: &Client, webhook_url: &str, message: &Value) -> Result<(), AppError> {
    let response = http
        .post(webhook_url)
        .json(message)
        .send()
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to send to Slack: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!("Slack webhook returned {}: {}", status, error_text);
        return Err(AppError::Upstream(format!(
            "Failed to send to Slack: {}",
            error_text
        )));
    }

    Ok(())
}
