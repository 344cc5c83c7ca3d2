//! Argon2 password hashing in PHC string format.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::RngExt;

use crate::error::AuthServiceError;

const SALT_LEN: usize = 16;

fn generate_salt() -> Result<SaltString, AuthServiceError> {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..SALT_LEN)
        .map(|_| rng.random_range(0..=u8::MAX))
        .collect();
    SaltString::encode_b64(&bytes)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("encode salt: {e}")))
}

pub fn hash_password(password: &str) -> Result<String, AuthServiceError> {
    let salt = generate_salt()?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthServiceError::Internal(anyhow::anyhow!("hash password: {e}")))?;
    Ok(hash.to_string())
}

/// `false` for a wrong password or an unparseable stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(password_hash) else {
        tracing::warn!("stored password hash is not a valid PHC string");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
