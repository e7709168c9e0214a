use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::service::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::error::ApiError;
use crate::gateway::state::AppState;

/// Register a new user
///
/// POST /signup
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Missing or empty username/password"),
        (status = 409, description = "Username already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let user = state.auth.signup(req).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created".to_string(),
            user,
        }),
    ))
}

/// Login and obtain a JWT
///
/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state.auth.login(req).await.inspect_err(|e| {
        if matches!(e, ApiError::InvalidCredentials) {
            tracing::warn!("login failed");
        }
    })?;

    Ok(Json(LoginResponse { token }))
}
