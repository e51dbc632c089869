use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}
