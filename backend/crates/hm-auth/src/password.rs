//! Password strength policy, hashing and verification.
//!
//! Hashing uses Argon2id with a fresh salt per call, so hashing the same
//! password twice yields different digests. Verification parses the PHC
//! string and compares inside the password-hash stack; a mismatch or a
//! malformed digest is `false`, never an error. The plaintext is never
//! logged or stored.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A single strength-rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    TooShort,
    MissingLowercase,
    MissingUppercase,
    MissingDigit,
}

impl PasswordViolation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooShort => "Password must be at least 6 characters",
            Self::MissingLowercase => "Password must contain a lowercase letter",
            Self::MissingUppercase => "Password must contain an uppercase letter",
            Self::MissingDigit => "Password must contain a digit",
        }
    }
}

/// Composition check: minimum length plus one lowercase, one uppercase and
/// one digit. Other characters are permitted anywhere; order is irrelevant.
pub fn check_strength(password: &str) -> Result<(), Vec<PasswordViolation>> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        violations.push(PasswordViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(PasswordViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(PasswordViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordViolation::MissingDigit);
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Hash a password with a fresh random salt
#[track_caller]
pub fn hash(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Verify a password against a stored digest. Failure modes are boolean:
/// wrong password and unparseable digest both return false.
pub fn verify(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
