//! Notes: model, ownership-scoped store, service, and handlers.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

pub use models::{CreateNoteRequest, Note, UpdateNoteRequest};
pub use repository::{NoteStore, PgNoteStore};
pub use service::NoteService;
