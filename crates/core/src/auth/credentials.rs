//! Password hashing and login credential checks with Argon2id.

use std::sync::LazyLock;

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Errors that can occur during credential operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Failed to hash password.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Stored hash is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,

    /// Unknown user or wrong password.
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Hash verified for unknown emails so they cost as much as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("aerodesk-unknown-user").ok());

fn dummy_hash() -> Option<&'static str> {
    DUMMY_HASH.as_deref()
}

/// Hashes a password into a PHC string.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use aerodesk_core::auth::hash_password;
///
/// let hash = hash_password("s3cret").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Returns whether `password` matches the stored hash.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHash)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Checks a login attempt against the stored hash of the user found by email.
///
/// A missing user and a wrong password produce the same error, and both run
/// one Argon2 verification.
///
/// # Errors
///
/// Returns `PasswordError::InvalidCredentials` when the login must be refused,
/// or `PasswordError::InvalidHash` when the stored hash is corrupt.
pub fn check_credentials(password: &str, stored_hash: Option<&str>) -> Result<(), PasswordError> {
    let Some(hash) = stored_hash else {
        if let Some(dummy) = dummy_hash() {
            let _ = verify_password(password, dummy);
        }
        return Err(PasswordError::InvalidCredentials);
    };

    if verify_password(password, hash)? {
        Ok(())
    } else {
        Err(PasswordError::InvalidCredentials)
    }
}
