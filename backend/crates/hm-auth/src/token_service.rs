use crate::{AuthError, Claims, Result as AuthErrorResult};

use hm_core::Guest;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Default token lifetime: 24 hours
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Issues and verifies HS256-signed bearer tokens.
///
/// Stateless by design: there is no revocation list, so logout cannot
/// invalidate an outstanding token before its natural expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
        }
    }

    pub fn with_default_ttl(secret: &[u8]) -> Self {
        Self::new(secret, DEFAULT_TOKEN_TTL_SECS)
    }

    /// Issue a token for a guest. Each call stamps a fresh issued-at and
    /// expiry, so refresh is a sliding window rather than token chaining.
    #[track_caller]
    pub fn issue(&self, guest: &Guest) -> AuthErrorResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: guest.id.to_string(),
            email: guest.email.clone(),
            name: guest.name.clone(),
            iat,
            exp: iat + self.ttl_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::TokenEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return its claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
