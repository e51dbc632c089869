//! Axum extractor for bearer-token authentication.

use crate::api::error::ApiError;
use crate::state::AppState;

use hm_auth::Claims;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts and verifies the `Authorization: Bearer <token>` header.
///
/// A missing header (or one without a bearer token) is 401; a token that
/// fails verification is 403.
pub struct AuthGuest(pub Claims);

impl FromRequestParts<AppState> for AuthGuest {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(http::header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .filter(|token| !token.is_empty())
                .ok_or_else(|| ApiError::unauthorized("Access token required"))?;

            let claims = state.tokens().verify(token).map_err(|e| {
                log::debug!("Token rejected: {}", e.error_code());
                ApiError::forbidden("Invalid or expired token")
            })?;

            Ok(AuthGuest(claims))
        }
    }
}
