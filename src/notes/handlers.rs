use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::models::{CreateNoteRequest, Note, UpdateNoteRequest};
use crate::auth::token::AuthUser;
use crate::error::ApiError;
use crate::gateway::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// A non-UUID path segment can never name an existing note, so it
/// reports the same NotFound as an unknown id.
fn parse_note_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}

/// Create a note
///
/// POST /notes
#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 400, description = "Missing or empty title/content"),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Token is required"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notes"
)]
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let note = state.notes.create(&user, req).await?;
    tracing::info!(note_id = %note.id, user_id = user.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// List the caller's notes
///
/// GET /notes
#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Caller's notes", body = [Note]),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Token is required")
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state.notes.list(&user).await?;
    Ok(Json(notes))
}

/// Update a note (partial: omitted fields keep their value)
///
/// PUT /notes/{id}
#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note id")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 400, description = "Supplied field is empty"),
        (status = 404, description = "Note not found"),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Token is required")
    ),
    tag = "Notes"
)]
pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let note_id = parse_note_id(&id)?;
    let note = state.notes.update(&user, note_id, req).await?;
    Ok(Json(note))
}

/// Delete a note
///
/// DELETE /notes/{id}
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = Uuid, Path, description = "Note id")),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 404, description = "Note not found"),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Token is required")
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let note_id = parse_note_id(&id)?;
    state.notes.delete(&user, note_id).await?;
    tracing::info!(note_id = %note_id, user_id = user.id, "note deleted");

    Ok(Json(MessageResponse {
        message: "Note deleted".to_string(),
    }))
}
