//! Password hashing (Argon2id)
//!
//! Each hash carries its own fresh salt in the PHC string, so no
//! separate salt storage is needed. The work factor is Argon2's
//! default parameter set.

use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hash a plaintext password into a PHC string.
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

/// Verify a plaintext password against a stored PHC string.
///
/// A malformed stored hash is a verification failure, not a panic.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}
