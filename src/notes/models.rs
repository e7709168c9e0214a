//! Note data model and request DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A personal text note.
///
/// `user_id` is set exactly once at creation from the verified
/// identity, never from client input.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Note {
    pub id: Uuid,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create Note Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "Groceries")]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[schema(example = "milk, eggs")]
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Update Note Request (PATCH semantics: omitted fields keep their
/// prior value; supplied fields must be non-empty)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateNoteRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,
}
