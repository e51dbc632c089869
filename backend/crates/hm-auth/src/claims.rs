use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in a bearer token. Validity is fully determined by the
/// signature and `exp`; there is no server-side session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (guest id)
    pub sub: String,
    pub email: String,
    /// Display name
    pub name: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (guest id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub is not a valid UUID".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "email".to_string(),
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// The subject parsed as a guest id. `validate()` has already checked
    /// the format for verified tokens.
    #[track_caller]
    pub fn guest_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
