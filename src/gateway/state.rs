use std::sync::Arc;

use crate::auth::AuthService;
use crate::notes::NoteService;

/// Shared application state
///
/// Constructed once in `main` and cloned behind an `Arc` into every
/// request. Immutable after startup.
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub notes: Arc<NoteService>,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, notes: Arc<NoteService>) -> Self {
        Self { auth, notes }
    }
}
