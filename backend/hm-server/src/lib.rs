pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{change_password, login, logout, refresh_token, register, reset_password},
        change_password_request::ChangePasswordRequest,
        login_request::LoginRequest,
        refresh_request::RefreshTokenRequest,
        register_request::RegisterRequest,
        reset_password_request::ResetPasswordRequest,
        session_response::SessionData,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_guest::AuthGuest,
    guests::{
        guest_dto::GuestDto,
        guest_page_dto::GuestPageDto,
        guests::{
            delete_guest, get_guest, get_guest_by_email, get_profile, list_guests, update_guest,
            update_profile,
        },
        list_guests_query::ListGuestsQuery,
        update_guest_request::UpdateGuestRequest,
    },
    response::{ApiResponse, FieldError},
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
