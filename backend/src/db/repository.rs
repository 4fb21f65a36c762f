//! Database repository for todo CRUD operations.

use chrono::{SecondsFormat, Utc};
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Todo, TodoFields};

const TODO_COLUMNS: &str = "id, title, description, completed, created_at";

/// Newest first; rowid breaks ties between rows created in the same microsecond.
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, rowid DESC";

/// Database repository for all todo operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all todos, newest first.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos {NEWEST_FIRST}");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(todo_from_row).collect())
    }

    /// List todos that are not completed, newest first.
    pub async fn list_pending_todos(&self) -> Result<Vec<Todo>, AppError> {
        let sql = format!("SELECT {TODO_COLUMNS} FROM todos WHERE completed = 0 {NEWEST_FIRST}");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        Ok(rows.iter().map(todo_from_row).collect())
    }

    /// Insert a new pending todo and return the stored row.
    pub async fn create_todo(&self, fields: &TodoFields) -> Result<Todo, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let sql = format!(
            "INSERT INTO todos (id, title, description, completed, created_at) VALUES (?, ?, ?, 0, ?) RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&id)
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(&now)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref()
            .map(todo_from_row)
            .ok_or_else(|| AppError::Internal("Failed to create todo".to_string()))
    }

    /// Overwrite title, description and (when given) the completed flag.
    ///
    /// Returns `None` when no row has the given ID.
    pub async fn update_todo(
        &self,
        id: &str,
        fields: &TodoFields,
        completed: Option<bool>,
    ) -> Result<Option<Todo>, AppError> {
        let sql = format!(
            "UPDATE todos SET title = ?, description = ?, completed = COALESCE(?, completed) WHERE id = ? RETURNING {TODO_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&fields.title)
            .bind(&fields.description)
            .bind(completed.map(|c| c as i32))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(todo_from_row))
    }

    /// Delete a todo. Deleting an unknown ID is not an error.
    pub async fn delete_todo(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!("Delete matched no todo with id {}", id);
        }

        Ok(())
    }
}

fn todo_from_row(row: &sqlx::sqlite::SqliteRow) -> Todo {
    let completed: i32 = row.get("completed");
    Todo {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        completed: completed != 0,
        created_at: row.get("created_at"),
    }
}
