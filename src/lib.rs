//! notebox - Multi-user note-taking HTTP service
//!
//! Users sign up, log in to obtain a time-limited JWT, and manage
//! their own notes with it. Every note operation is scoped to the
//! owner resolved from the verified token.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool and migrations
//! - [`error`] - API error taxonomy and HTTP mapping
//! - [`auth`] - password hashing, token issue/verify, signup/login, JWT middleware
//! - [`notes`] - ownership-scoped note CRUD
//! - [`gateway`] - axum router, shared state, CORS, OpenAPI

pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub mod auth;
pub mod gateway;
pub mod notes;

// Convenient re-exports at crate root
pub use auth::service::AuthService;
pub use auth::token::{AuthUser, TokenIssuer};
pub use config::AppConfig;
pub use db::Database;
pub use error::ApiError;
pub use gateway::state::AppState;
pub use notes::service::NoteService;
