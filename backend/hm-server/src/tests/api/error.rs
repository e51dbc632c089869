use crate::api::error::ApiError;

use hm_auth::AuthError;
use hm_core::StoreError;

use std::panic::Location;

use axum::http::StatusCode;
use error_location::ErrorLocation;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn test_status_mapping_follows_error_taxonomy() {
    assert_eq!(
        ApiError::validation("bad", Vec::new()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::unauthorized("no").status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(ApiError::forbidden("no").status(), StatusCode::FORBIDDEN);
    assert_eq!(ApiError::not_found("gone").status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::conflict("dup").status(), StatusCode::CONFLICT);
    assert_eq!(
        ApiError::internal("boom").status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_invalid_credentials_maps_to_401() {
    let err = ApiError::from(AuthError::InvalidCredentials { location: here() });

    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_inactive_account_maps_to_401() {
    let err = ApiError::from(AuthError::InactiveAccount { location: here() });

    assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_duplicates_map_to_409() {
    let email = ApiError::from(AuthError::DuplicateEmail { location: here() });
    let cpf = ApiError::from(AuthError::DuplicateCpf { location: here() });

    assert_eq!(email.status(), StatusCode::CONFLICT);
    assert_eq!(cpf.status(), StatusCode::CONFLICT);
}

#[test]
fn test_token_failures_map_to_403() {
    let expired = ApiError::from(AuthError::TokenExpired { location: here() });
    let malformed = ApiError::from(AuthError::MalformedToken {
        message: "garbage".into(),
        location: here(),
    });

    assert_eq!(expired.status(), StatusCode::FORBIDDEN);
    assert_eq!(malformed.status(), StatusCode::FORBIDDEN);
}

#[test]
fn test_missing_store_row_maps_to_404() {
    let err = ApiError::from(AuthError::Store {
        source: StoreError::NotFound,
        location: here(),
    });

    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_rate_limit_maps_to_429() {
    let err = ApiError::from(AuthError::RateLimitExceeded {
        limit: 30,
        window_secs: 60,
        location: here(),
    });

    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn test_backend_store_error_maps_to_500() {
    let err = ApiError::from(AuthError::Store {
        source: StoreError::Backend {
            message: "disk on fire".into(),
        },
        location: here(),
    });

    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
