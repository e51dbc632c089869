pub mod auth_guest;
