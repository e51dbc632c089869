//! Authentication REST handlers: register, login, token refresh, logout,
//! password change and the password-reset stub.

use crate::api::auth::change_password_request::ChangePasswordRequest;
use crate::api::auth::login_request::LoginRequest;
use crate::api::auth::refresh_request::RefreshTokenRequest;
use crate::api::auth::register_request::RegisterRequest;
use crate::api::auth::reset_password_request::ResetPasswordRequest;
use crate::api::auth::session_response::SessionData;
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_guest::AuthGuest;
use crate::api::response::{ApiResponse, FieldError, created, ok, ok_empty};
use crate::api::validation;
use crate::state::AppState;

use axum::{Json, extract::State, http::StatusCode};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create a guest account and issue a first bearer token
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SessionData>>)> {
    state.rate_limiter.check()?;

    let errors = validation::validate_registration(&req, &state.validation);
    if !errors.is_empty() {
        return Err(ApiError::validation("Invalid input data", errors));
    }

    let session = state.workflow.register(req.into_registration()).await?;

    log::info!("Guest registered: {}", session.guest.id);

    Ok(created(
        "Guest registered successfully",
        SessionData::from(session),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SessionData>>)> {
    state.rate_limiter.check()?;

    let mut errors = Vec::new();
    if req.email.trim().is_empty() {
        errors.push(FieldError::new("email", "Email is required"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }
    if !errors.is_empty() {
        return Err(ApiError::validation("Invalid input data", errors));
    }

    let email = req.email.trim().to_lowercase();
    let session = state.workflow.login(&email, &req.password).await?;

    Ok(ok("Login successful", SessionData::from(session)))
}

/// POST /api/v1/auth/refresh-token
///
/// Sliding-window renewal: a fresh token with a new expiry
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshTokenRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SessionData>>)> {
    state.rate_limiter.check()?;

    let session = state.workflow.refresh(&req.token).await?;

    Ok(ok("Token refreshed successfully", SessionData::from(session)))
}

/// POST /api/v1/auth/logout
///
/// Tokens are stateless and cannot be revoked server-side; logout only
/// acknowledges the client-side discard.
pub async fn logout(AuthGuest(_claims): AuthGuest) -> (StatusCode, Json<ApiResponse<()>>) {
    ok_empty("Logout successful")
}

/// POST /api/v1/auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<()>>)> {
    let errors = validation::validate_change_password(&req);
    if !errors.is_empty() {
        return Err(ApiError::validation("Invalid input data", errors));
    }

    let guest_id = claims.guest_id()?;
    state
        .workflow
        .change_password(guest_id, &req.current_password, &req.new_password)
        .await?;

    log::info!("Password changed for guest {}", guest_id);

    Ok(ok_empty("Password changed successfully"))
}

/// POST /api/v1/auth/reset-password
///
/// Delivery is out of scope; this only confirms the address is known.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<()>>)> {
    let email = req.email.trim().to_lowercase();

    let known = state
        .repository()
        .find_by_email(&email)
        .await?
        .is_some_and(|g| g.active);

    if !known {
        return Err(ApiError::not_found("Email not found"));
    }

    Ok(ok_empty("Password reset instructions sent to the email"))
}
