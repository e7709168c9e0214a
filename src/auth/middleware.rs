//! Authorization gate
//!
//! Every note-management route passes through here. The gate either
//! short-circuits with a rejection or forwards a verified [`AuthUser`]
//! in the request extensions; handlers never see an unauthenticated
//! request.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::gateway::state::AppState;

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
}

pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    // Missing or non-bearer header: credential required (403).
    let token = bearer_token(request.headers()).ok_or(ApiError::MissingCredential)?;

    // Token present but unverifiable: invalid credential (401). The
    // expired/malformed distinction is logged, never sent back.
    match state.auth.verify_token(token) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, "token verification failed");
            Err(ApiError::InvalidCredential)
        }
    }
}
