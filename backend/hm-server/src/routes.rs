use crate::health;
use crate::state::AppState;

use crate::api::auth::auth::{
    change_password, login, logout, refresh_token, register, reset_password,
};
use crate::api::guests::guests::{
    delete_guest, get_guest, get_guest_by_email, get_profile, list_guests, update_guest,
    update_profile,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/refresh-token", post(refresh_token))
        .route("/api/v1/auth/logout", post(logout))
        .route("/api/v1/auth/change-password", post(change_password))
        .route("/api/v1/auth/reset-password", post(reset_password))
        // Guest endpoints
        .route("/api/v1/guests", get(list_guests))
        .route(
            "/api/v1/guests/profile",
            get(get_profile).put(update_profile),
        )
        .route("/api/v1/guests/email/{email}", get(get_guest_by_email))
        .route(
            "/api/v1/guests/{id}",
            get(get_guest).put(update_guest).delete(delete_guest),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (the SPA frontend is served from another origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
