//! Guest REST handlers: paginated listing, profile access, lookups and
//! soft delete.
//!
//! Authorization is a flat capability check: a guest may only touch their
//! own record (there is no admin role in the token).

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_guest::AuthGuest;
use crate::api::guests::guest_dto::GuestDto;
use crate::api::guests::guest_page_dto::GuestPageDto;
use crate::api::guests::list_guests_query::ListGuestsQuery;
use crate::api::guests::update_guest_request::UpdateGuestRequest;
use crate::api::response::{ApiResponse, ok, ok_empty};
use crate::api::validation;
use crate::state::AppState;

use hm_auth::Claims;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/guests?page&limit
pub async fn list_guests(
    State(state): State<AppState>,
    AuthGuest(_claims): AuthGuest,
    Query(query): Query<ListGuestsQuery>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestPageDto>>)> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let page = state.repository().find_page(page, limit).await?;

    Ok(ok("Guests listed successfully", GuestPageDto::from(page)))
}

/// GET /api/v1/guests/profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let guest = find_active(&state, claims.guest_id()?).await?;

    Ok(ok("Profile found", GuestDto::from(guest)))
}

/// PUT /api/v1/guests/profile
pub async fn update_profile(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
    Json(req): Json<UpdateGuestRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let updated = apply_update(&state, claims.guest_id()?, &req).await?;

    Ok(ok("Profile updated successfully", updated))
}

/// GET /api/v1/guests/{id}
pub async fn get_guest(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let guest_id = Uuid::parse_str(&id)?;
    ensure_self(&claims, guest_id)?;

    let guest = find_active(&state, guest_id).await?;

    Ok(ok("Guest found", GuestDto::from(guest)))
}

/// GET /api/v1/guests/email/{email}
pub async fn get_guest_by_email(
    State(state): State<AppState>,
    AuthGuest(_claims): AuthGuest,
    Path(email): Path<String>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let guest = state
        .repository()
        .find_by_email(&email.trim().to_lowercase())
        .await?
        .filter(|g| g.active)
        .ok_or_else(|| ApiError::not_found("Guest not found"))?;

    Ok(ok("Guest found", GuestDto::from(guest)))
}

/// PUT /api/v1/guests/{id}
pub async fn update_guest(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
    Path(id): Path<String>,
    Json(req): Json<UpdateGuestRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<GuestDto>>)> {
    let guest_id = Uuid::parse_str(&id)?;
    ensure_self(&claims, guest_id)?;

    let updated = apply_update(&state, guest_id, &req).await?;

    Ok(ok("Guest updated successfully", updated))
}

/// DELETE /api/v1/guests/{id}
///
/// Soft delete; outstanding tokens stay valid until they expire
pub async fn delete_guest(
    State(state): State<AppState>,
    AuthGuest(claims): AuthGuest,
    Path(id): Path<String>,
) -> ApiResult<(StatusCode, Json<ApiResponse<()>>)> {
    let guest_id = Uuid::parse_str(&id)?;
    ensure_self(&claims, guest_id)?;

    state.workflow.deactivate(guest_id, claims.guest_id()?).await?;

    log::info!("Guest deactivated: {}", guest_id);

    Ok(ok_empty("Guest removed successfully"))
}

// =============================================================================
// Helpers
// =============================================================================

/// Flat capability check: the token subject must be the addressed guest
fn ensure_self(claims: &Claims, id: Uuid) -> ApiResult<()> {
    if claims.guest_id()? != id {
        return Err(ApiError::forbidden("You can only access your own data"));
    }
    Ok(())
}

async fn find_active(state: &AppState, id: Uuid) -> ApiResult<hm_core::Guest> {
    state
        .repository()
        .find_by_id(id)
        .await?
        .filter(|g| g.active)
        .ok_or_else(|| ApiError::not_found("Guest not found"))
}

/// Shared by the profile and by-id update handlers: validate, pre-check
/// uniqueness for changed email/CPF, persist. The store's unique indexes
/// remain the authoritative check behind the pre-check.
async fn apply_update(
    state: &AppState,
    id: Uuid,
    req: &UpdateGuestRequest,
) -> ApiResult<GuestDto> {
    let repo = state.repository();
    let current = find_active(state, id).await?;

    let errors = validation::validate_update(req, &state.validation);
    if !errors.is_empty() {
        return Err(ApiError::validation("Invalid input data", errors));
    }

    let update = req.to_update();
    if update.is_empty() {
        return Err(ApiError::validation(
            "No valid fields to update",
            Vec::new(),
        ));
    }

    if let Some(ref email) = update.email {
        if *email != current.email {
            let taken = repo
                .find_by_email(email)
                .await?
                .is_some_and(|g| g.active && g.id != id);
            if taken {
                return Err(ApiError::conflict("Email already in use"));
            }
        }
    }

    if let Some(ref cpf) = update.cpf {
        if current.cpf.as_deref() != Some(cpf.as_str()) {
            let taken = repo
                .find_by_cpf(cpf)
                .await?
                .is_some_and(|g| g.active && g.id != id);
            if taken {
                return Err(ApiError::conflict("CPF already in use"));
            }
        }
    }

    let updated = repo.update_fields(id, &update).await?;

    Ok(GuestDto::from(updated))
}
