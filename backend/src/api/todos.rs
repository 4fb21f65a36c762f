//! Todo API endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{CreateTodoRequest, SuccessResponse, Todo, TodoFields, UpdateTodoRequest};
use crate::AppState;

fn title_required() -> AppError {
    AppError::Validation("Title is required".to_string())
}

/// GET /api/todos - List all todos, newest first.
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.repo.list_todos().await?;
    Ok(Json(todos))
}

/// POST /api/todos - Create a new todo.
///
/// The body is parsed as JSON whatever its Content-Type.
pub async fn create_todo(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<Todo>> {
    let request: CreateTodoRequest = serde_json::from_slice(&body)?;
    let fields = request.into_fields().ok_or_else(title_required)?;

    tracing::info!(
        title = %fields.title,
        description = %fields.description,
        "Inserting todo"
    );

    let todo = state.repo.create_todo(&fields).await?;
    Ok(Json(todo))
}

/// PUT /api/todos/{id} - Update a todo; responds with `null` when the id is unknown.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<Json<Option<Todo>>> {
    let request: UpdateTodoRequest = serde_json::from_slice(&body)?;
    let fields =
        TodoFields::new(request.title, request.description).ok_or_else(title_required)?;

    let todo = state
        .repo
        .update_todo(&id, &fields, request.completed)
        .await?;
    Ok(Json(todo))
}

/// DELETE /api/todos/{id} - Delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SuccessResponse>> {
    state.repo.delete_todo(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}
