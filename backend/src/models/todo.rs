//! Todo model and request bodies.

use serde::{Deserialize, Serialize};

/// A single task record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// RFC 3339 UTC timestamp assigned on insert
    pub created_at: String,
}

/// Request body for creating a new todo.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for updating an existing todo.
///
/// Title and description are always overwritten; `completed` is left untouched when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Validated fields written by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
}

impl TodoFields {
    /// Returns `None` when the title is missing or only whitespace.
    pub fn new(title: Option<String>, description: Option<String>) -> Option<Self> {
        let title = title.filter(|t| !t.trim().is_empty())?;
        Some(Self {
            title,
            description: description.unwrap_or_default(),
        })
    }
}

impl CreateTodoRequest {
    pub fn into_fields(self) -> Option<TodoFields> {
        TodoFields::new(self.title, self.description)
    }
}
