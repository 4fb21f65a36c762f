//! Data models for the todo summary application.
//!
//! Field names match the JSON the page and API clients exchange.

mod summary;
mod todo;

pub use summary::*;
pub use todo::*;
