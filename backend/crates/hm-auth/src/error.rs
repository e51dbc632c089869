use hm_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Same error for unknown email and wrong password, so a caller cannot
    /// enumerate registered accounts
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account is deactivated {location}")]
    InactiveAccount { location: ErrorLocation },

    #[error("Email already in use {location}")]
    DuplicateEmail { location: ErrorLocation },

    #[error("CPF already in use {location}")]
    DuplicateCpf { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token signature is invalid {location}")]
    InvalidSignature { location: ErrorLocation },

    #[error("Malformed token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token encoding failed: {source} {location}")]
    TokenEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code used by the HTTP layer
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::InactiveAccount { .. } => "INACTIVE_ACCOUNT",
            Self::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            Self::DuplicateCpf { .. } => "DUPLICATE_CPF",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::InvalidSignature { .. } => "INVALID_SIGNATURE",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::TokenEncode { .. } => "TOKEN_ENCODE_FAILED",
            Self::Hash { .. } => "HASH_FAILED",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
            Self::Store { .. } => "STORE_ERROR",
        }
    }
}

/// Duplicate-key conflicts from the store are the authoritative uniqueness
/// answer; they surface as the same typed errors as the in-process pre-check.
impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            StoreError::DuplicateEmail => Self::DuplicateEmail { location },
            StoreError::DuplicateCpf => Self::DuplicateCpf { location },
            source => Self::Store { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
