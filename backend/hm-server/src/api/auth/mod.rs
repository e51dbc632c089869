pub mod auth;
pub mod change_password_request;
pub mod login_request;
pub mod refresh_request;
pub mod register_request;
pub mod reset_password_request;
pub mod session_response;
