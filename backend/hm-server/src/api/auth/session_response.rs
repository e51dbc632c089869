use crate::api::guests::guest_dto::GuestDto;

use hm_auth::Session;

use serde::Serialize;

/// Payload for register/login/refresh: the guest and the bearer token
#[derive(Debug, Serialize)]
pub struct SessionData {
    pub guest: GuestDto,
    pub token: String,
}

impl From<Session> for SessionData {
    fn from(s: Session) -> Self {
        Self {
            guest: GuestDto::from(s.guest),
            token: s.token,
        }
    }
}
