//! Slack Block Kit message for a generated summary.

use serde_json::{json, Value};

/// Header text of every summary message.
pub const SUMMARY_HEADER: &str = "📋 Todo Summary";

/// Section text used when the model returned no content.
pub const EMPTY_SUMMARY_TEXT: &str = "No summary generated";

/// Build the webhook payload: header, summary section, and pending count context.
///
/// An absent or empty summary is replaced by [`EMPTY_SUMMARY_TEXT`].
#[must_use]
pub fn build_summary_message(summary: Option<&str>, pending_count: usize) -> Value {
    json!({
        "blocks": [
            {
                "type": "header",
                "text": {
                    "type": "plain_text",
                    "text": SUMMARY_HEADER,
                    "emoji": true
                }
            },
            {
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": summary.filter(|s| !s.is_empty()).unwrap_or(EMPTY_SUMMARY_TEXT)
                }
            },
            {
                "type": "context",
                "elements": [
                    {
                        "type": "mrkdwn",
                        "text": format!("*Pending Tasks:* {}", pending_count)
                    }
                ]
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_layout() {
        let message = build_summary_message(Some("Do A, then B"), 2);
        let blocks = message["blocks"].as_array().unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0]["type"], "header");
        assert_eq!(blocks[0]["text"]["text"], SUMMARY_HEADER);
        assert_eq!(blocks[0]["text"]["emoji"], true);
        assert_eq!(blocks[1]["type"], "section");
        assert_eq!(blocks[1]["text"]["type"], "mrkdwn");
        assert_eq!(blocks[1]["text"]["text"], "Do A, then B");
        assert_eq!(blocks[2]["type"], "context");
        assert_eq!(blocks[2]["elements"][0]["text"], "*Pending Tasks:* 2");
    }

    #[test]
    fn test_missing_summary_uses_placeholder() {
        let message = build_summary_message(None, 1);
        assert_eq!(message["blocks"][1]["text"]["text"], EMPTY_SUMMARY_TEXT);
    }

    #[test]
    fn test_empty_summary_uses_placeholder() {
        let message = build_summary_message(Some(""), 1);
        assert_eq!(message["blocks"][1]["text"]["text"], EMPTY_SUMMARY_TEXT);
    }
}
