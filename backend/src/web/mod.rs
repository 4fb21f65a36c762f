//! Single-page UI served at `/`.
//!
//! The page only talks to the JSON endpoints under `/api`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("index.html");

/// GET / - The todo page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
