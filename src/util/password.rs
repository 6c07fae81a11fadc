//! Password hashing and verification utilities
//!
//! Argon2id hashing for site accounts, plus a strength check applied on
//! registration.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::{debug, error};

/// Error types for password operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Failed to verify password: {0}")]
    VerificationFailed(String),
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

pub trait PasswordUtils {
    /// Hashes the given password using Argon2id
    fn hash_password(password: &str) -> Result<String, PasswordError>;

    /// Verifies the given password against the stored hash
    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError>;

    /// Validates the strength of the given password
    fn validate_password_strength(password: &str) -> Result<(), Vec<String>>;
}

pub struct PasswordUtilsImpl;

impl PasswordUtils for PasswordUtilsImpl {
    fn hash_password(password: &str) -> Result<String, PasswordError> {
        debug!("Hashing password");

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| {
                error!("Failed to hash password: {}", err);
                PasswordError::HashingFailed(err.to_string())
            })
    }

    fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|err| {
            error!("Invalid password hash format: {}", err);
            PasswordError::InvalidHashFormat
        })?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordError::VerificationFailed(err.to_string())),
        }
    }

    fn validate_password_strength(password: &str) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if password.len() < 8 {
            problems.push("Password must be at least 8 characters long".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            problems.push("Password must contain an uppercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            problems.push("Password must contain a lowercase letter".to_string());
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            problems.push("Password must contain a digit".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = PasswordUtilsImpl::hash_password("Secreto123").unwrap();
        assert!(PasswordUtilsImpl::verify_password("Secreto123", &hash).unwrap());
        assert!(!PasswordUtilsImpl::verify_password("Secreto124", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(PasswordUtilsImpl::verify_password("x", "not-a-hash").is_err());
    }

    #[test]
    fn test_strength_validation() {
        assert!(PasswordUtilsImpl::validate_password_strength("Secreto123").is_ok());
        let errs = PasswordUtilsImpl::validate_password_strength("abc").unwrap_err();
        assert!(!errs.is_empty());
    }
}
