//! Response bodies for the summarize and delete endpoints.

use serde::{Deserialize, Serialize};

/// Successful summarization result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub success: bool,
    /// Completion text; `null` when the model returned no content
    pub summary: Option<String>,
}

/// Bare success acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
