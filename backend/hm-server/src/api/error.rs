//! REST API error types.
//!
//! The workflow layer raises typed errors; this module alone maps them to
//! HTTP status codes and redacts internal detail. Responses use the same
//! `{success, message, errors?}` envelope as successes.

use crate::api::response::{ApiResponse, FieldError};

use hm_auth::AuthError;
use hm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Missing or unusable credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Invalid or expired token, or access to someone else's data (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Rate limited (429)
    #[error("Rate limit exceeded: {limit} requests per {window_secs}s {location}")]
    TooManyRequests {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    /// Internal server error (500); detail stays in the log
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, errors: Vec<FieldError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Status code this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging; the response carries less
        log::error!("{}", self);

        let status = self.status();
        let (message, errors) = match self {
            ApiError::Validation {
                message, errors, ..
            } => (message, Some(errors)),
            ApiError::Unauthorized { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. } => (message, None),
            ApiError::TooManyRequests { .. } => ("Too many attempts, try again later".into(), None),
            // Never expose internal detail to clients
            ApiError::Internal { .. } => ("Internal server error".into(), None),
        };

        let body: ApiResponse<()> = ApiResponse {
            success: false,
            message,
            data: None,
            errors,
        };

        (status, Json(body)).into_response()
    }
}

/// Workflow errors carry the taxonomy; this is the single place where it
/// becomes status codes
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::InvalidCredentials { .. } => Self::Unauthorized {
                message: "Invalid credentials".into(),
                location,
            },
            AuthError::InactiveAccount { .. } => Self::Unauthorized {
                message: "Account is deactivated".into(),
                location,
            },
            AuthError::DuplicateEmail { .. } => Self::Conflict {
                message: "Email already in use".into(),
                location,
            },
            AuthError::DuplicateCpf { .. } => Self::Conflict {
                message: "CPF already in use".into(),
                location,
            },
            AuthError::TokenExpired { .. }
            | AuthError::InvalidSignature { .. }
            | AuthError::MalformedToken { .. }
            | AuthError::InvalidClaim { .. } => Self::Forbidden {
                message: "Invalid or expired token".into(),
                location,
            },
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => Self::TooManyRequests {
                limit,
                window_secs,
                location,
            },
            AuthError::Store { ref source, .. }
                if matches!(source, hm_core::StoreError::NotFound) =>
            {
                Self::NotFound {
                    message: "Guest not found".into(),
                    location,
                }
            }
            e @ (AuthError::TokenEncode { .. }
            | AuthError::Hash { .. }
            | AuthError::Store { .. }) => {
                log::error!("Auth internal error: {}", e);
                Self::Internal {
                    message: e.to_string(),
                    location,
                }
            }
        }
    }
}

/// Repository errors reaching a handler directly (profile reads/updates)
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            DbError::UniqueViolation { ref column, .. } if column.ends_with("email") => {
                Self::Conflict {
                    message: "Email already in use".into(),
                    location,
                }
            }
            DbError::UniqueViolation { ref column, .. } if column.ends_with("cpf") => {
                Self::Conflict {
                    message: "CPF already in use".into(),
                    location,
                }
            }
            DbError::NotFound { .. } => Self::NotFound {
                message: "Guest not found".into(),
                location,
            },
            DbError::EmptyUpdate { .. } => Self::Validation {
                message: "No valid fields to update".into(),
                errors: Vec::new(),
                location,
            },
            e => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", e);
                Self::Internal {
                    message: "Database operation failed".into(),
                    location,
                }
            }
        }
    }
}

/// Convert UUID parse errors from path parameters
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            errors: Vec::new(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
