//! Signup and login orchestration over the user store, password
//! hasher, and token issuer.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use validator::Validate;

use super::password;
use super::repository::{UserStore, UserStoreError};
use super::token::{AuthUser, TokenError, TokenIssuer};
use crate::error::ApiError;

/// Signup Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    #[schema(example = "alice")]
    #[validate(length(min = 1, max = 64, message = "username is required"))]
    pub username: String,
    #[schema(example = "pw123")]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Login Request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[schema(example = "pw123")]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Public user profile. Never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
}

/// Signup Response
#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Login Response (JWT)
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenIssuer,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Register a new user and return the public profile.
    pub async fn signup(&self, req: SignupRequest) -> Result<UserProfile, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let password_hash = password::hash_password(&req.password)?;

        let user = match self.users.create(&req.username, &password_hash).await {
            Ok(user) => user,
            Err(UserStoreError::DuplicateUsername) => {
                tracing::warn!(username = %req.username, "signup attempt for existing username");
                return Err(ApiError::Conflict);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(UserProfile {
            id: user.user_id,
            username: user.username,
        })
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown username and wrong password are indistinguishable to the
    /// caller: both collapse to `InvalidCredentials`.
    pub async fn login(&self, req: LoginRequest) -> Result<String, ApiError> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        let user = self
            .users
            .find_by_username(&req.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !password::verify_password(&req.password, &user.password_hash) {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.user_id, &user.username)?;
        Ok(token)
    }

    /// Verify a bearer token (used by the authorization gate).
    pub fn verify_token(&self, token: &str) -> Result<AuthUser, TokenError> {
        self.tokens.verify(token)
    }
}
