//! Partial update for guest profile fields.

use chrono::NaiveDate;
use serde::Deserialize;

/// The set of fields a profile update may touch. `None` means "leave
/// unchanged"; the password is changed through its own operation and is
/// deliberately absent here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub pronoun: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
}

impl GuestUpdate {
    /// True when no field is set; such an update is rejected upstream
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.pronoun.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.birth_date.is_none()
            && self.cpf.is_none()
    }
}
