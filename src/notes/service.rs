//! Ownership-scoped note operations
//!
//! Every operation takes the verified identity resolved by the
//! authorization gate. A note owned by another user reports
//! `NotFound`, never a distinct "forbidden".

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::models::{CreateNoteRequest, Note, UpdateNoteRequest};
use super::repository::NoteStore;
use crate::auth::token::AuthUser;
use crate::error::ApiError;

pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Create a note owned by the caller.
    pub async fn create(&self, user: &AuthUser, req: CreateNoteRequest) -> Result<Note, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4(),
            user_id: user.id,
            title: req.title,
            content: req.content,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&note).await?;
        Ok(note)
    }

    /// All notes owned by the caller, in storage order.
    pub async fn list(&self, user: &AuthUser) -> Result<Vec<Note>, ApiError> {
        Ok(self.store.list_by_user(user.id).await?)
    }

    /// Partial update: omitted fields keep their prior value.
    pub async fn update(
        &self,
        user: &AuthUser,
        note_id: Uuid,
        req: UpdateNoteRequest,
    ) -> Result<Note, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let mut note = self
            .store
            .find(note_id, user.id)
            .await?
            .ok_or(ApiError::NotFound)?;

        if let Some(title) = req.title {
            note.title = title;
        }
        if let Some(content) = req.content {
            note.content = content;
        }
        note.updated_at = Utc::now();

        // The store re-checks (id, user_id); a concurrent delete
        // between find and update surfaces as NotFound.
        if !self.store.update(&note).await? {
            return Err(ApiError::NotFound);
        }
        Ok(note)
    }

    /// Delete is not idempotent: a second delete of the same id
    /// reports `NotFound`.
    pub async fn delete(&self, user: &AuthUser, note_id: Uuid) -> Result<(), ApiError> {
        if !self.store.delete(note_id, user.id).await? {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}
