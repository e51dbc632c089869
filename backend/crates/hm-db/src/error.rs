use hm_core::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {column} {location}")]
    UniqueViolation {
        column: String,
        location: ErrorLocation,
    },

    #[error("Guest not found {location}")]
    NotFound { location: ErrorLocation },

    #[error("Update contains no fields {location}")]
    EmptyUpdate { location: ErrorLocation },

    #[error("Corrupt row: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db) = source {
            if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
                // SQLite reports "UNIQUE constraint failed: guests.email"
                let column = db
                    .message()
                    .rsplit(": ")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                return Self::UniqueViolation { column, location };
            }
        }

        Self::Sqlx { source, location }
    }
}

/// The store trait speaks `StoreError`; the unique-index conflicts become
/// the typed duplicate errors the workflow expects (the index is the
/// authoritative uniqueness check).
impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { ref column, .. } if column.ends_with("email") => {
                StoreError::DuplicateEmail
            }
            DbError::UniqueViolation { ref column, .. } if column.ends_with("cpf") => {
                StoreError::DuplicateCpf
            }
            DbError::NotFound { .. } => StoreError::NotFound,
            e => StoreError::Backend {
                message: e.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
