//! Authentication: password hashing, token issue/verify,
//! signup/login, and the JWT authorization gate.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

pub use repository::{PgUserStore, User, UserStore, UserStoreError};
pub use service::AuthService;
pub use token::{AuthUser, TokenIssuer};
