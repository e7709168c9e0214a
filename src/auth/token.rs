//! JWT issue/verify
//!
//! Tokens are self-contained HS256 assertions of `{id, username}` with
//! issued-at/expiry claims. There is no revocation list: a token stays
//! valid until its expiry regardless of later user state changes.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Subject (user_id as string)
    pub username: String,
    pub exp: usize, // Expiration time (as UTC timestamp)
    pub iat: usize, // Issued at
}

/// Verified identity attached to a request after the authorization
/// gate succeeds. Handlers trust this for all ownership decisions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

/// Token verification failure.
///
/// The variants exist for logging only; the client always sees the
/// same "invalid or expired" rejection regardless of which one fired.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token malformed or signature mismatch")]
    Malformed,
}

/// Issues and verifies signed, time-bound tokens.
///
/// Keys are derived once from the configured secret at construction,
/// not per request.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Mint a signed token for the given identity.
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .context("token expiry overflows the calendar")?;

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to generate token")
    }

    /// Verify signature and expiry, returning the embedded identity.
    pub fn verify(&self, token: &str) -> Result<AuthUser, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed,
                }
            })?;

        let id = token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::Malformed)?;

        Ok(AuthUser {
            id,
            username: token_data.claims.username,
        })
    }
}
