//! REST API module.
//!
//! Handlers return plain JSON on success and `{"error": ...}` through `AppError` on failure.

mod summarize;
mod todos;

pub use summarize::*;
pub use todos::*;

use crate::errors::AppError;

/// Result type returned by every API handler.
pub type ApiResult<T> = Result<T, AppError>;
