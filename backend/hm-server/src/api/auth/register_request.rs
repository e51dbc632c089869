use hm_auth::{Registration, cpf};

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name (required)
    pub name: String,

    #[serde(default)]
    pub pronoun: Option<String>,

    pub email: String,

    pub password: String,

    #[serde(default)]
    pub phone: Option<String>,

    /// ISO date, YYYY-MM-DD
    #[serde(default)]
    pub birth_date: Option<String>,

    #[serde(default)]
    pub cpf: Option<String>,
}

impl RegisterRequest {
    /// Normalize into workflow input: trimmed name, lowercased email,
    /// digits-only CPF. Assumes `validate_registration` has already
    /// accepted the request.
    pub fn into_registration(self) -> Registration {
        Registration {
            name: self.name.trim().to_string(),
            pronoun: self.pronoun.map(|p| p.trim().to_string()),
            email: self.email.trim().to_lowercase(),
            password: self.password,
            phone: self.phone,
            birth_date: self
                .birth_date
                .as_deref()
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            cpf: self.cpf.map(|c| cpf::normalize(&c)),
        }
    }
}
