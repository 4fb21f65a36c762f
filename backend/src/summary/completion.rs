//! OpenAI chat completions client.
//!
//! Sends one system + user exchange and returns the first choice's text.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

/// Model used for every summary.
pub const SUMMARY_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(system: &str, user: &str) -> Self {
        Self {
            model: SUMMARY_MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
        }
    }
}

impl ChatCompletionResponse {
    /// Content of the first choice. The content itself may be `null`.
    pub fn into_first_content(self) -> Result<Option<String>, AppError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream("OpenAI API returned no choices".to_string()))
    }
}

/// Completion API client bound to a credential and base URL.
pub struct CompletionClient<'a> {
    http: &'a Client,
    api_base: &'a str,
    api_key: &'a str,
}

impl<'a> CompletionClient<'a> {
    pub fn new(http: &'a Client, api_base: &'a str, api_key: &'a str) -> Self {
        Self {
            http,
            api_base,
            api_key,
        }
    }

    /// Request one completion for the given system instruction and user prompt.
    pub async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, AppError> {
        let request = ChatCompletionRequest::new(system, user);
        info!(
            "Requesting completion from {} with {} messages",
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("OpenAI API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("OpenAI API returned {}: {}", status, error_text);
            return Err(AppError::Upstream(format!("OpenAI API error: {}", error_text)));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Failed to parse OpenAI response: {}", e))
        })?;

        parsed.into_first_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = ChatCompletionRequest::new("be brief", "- A");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], SUMMARY_MODEL);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "be brief");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "- A");
    }

    #[test]
    fn test_first_choice_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"first"}},{"index":1,"message":{"role":"assistant","content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_first_content().unwrap(),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_null_content_is_none() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#,
        )
        .unwrap();
        assert_eq!(response.into_first_content().unwrap(), None);
    }

    #[test]
    fn test_no_choices_is_error() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            response.into_first_content(),
            Err(AppError::Upstream(_))
        ));
    }
}
