use hm_auth::cpf;
use hm_core::GuestUpdate;

use chrono::NaiveDate;
use serde::Deserialize;

/// Partial profile update; absent fields stay unchanged. The password has
/// its own endpoint and is not updatable here.
#[derive(Debug, Deserialize)]
pub struct UpdateGuestRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub pronoun: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// ISO date, YYYY-MM-DD
    #[serde(default)]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub cpf: Option<String>,
}

impl UpdateGuestRequest {
    /// Normalize into the storage shape: trimmed name, lowercased email,
    /// digits-only CPF, parsed birth date. Assumes `validate_update` has
    /// already accepted the request.
    pub fn to_update(&self) -> GuestUpdate {
        GuestUpdate {
            name: self.name.as_ref().map(|n| n.trim().to_string()),
            pronoun: self.pronoun.as_ref().map(|p| p.trim().to_string()),
            email: self.email.as_ref().map(|e| e.trim().to_lowercase()),
            phone: self.phone.clone(),
            birth_date: self
                .birth_date
                .as_ref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            cpf: self.cpf.as_ref().map(|c| cpf::normalize(c)),
        }
    }
}
