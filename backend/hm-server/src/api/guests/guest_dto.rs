use hm_core::Guest;

use serde::Serialize;

/// Guest DTO for JSON serialization. The password hash never appears here.
#[derive(Debug, Serialize)]
pub struct GuestDto {
    pub id: String,
    pub name: String,
    pub pronoun: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    /// ISO date, YYYY-MM-DD
    pub birth_date: Option<String>,
    pub cpf: Option<String>,
    pub created_at: i64,
    pub active: bool,
}

impl From<Guest> for GuestDto {
    fn from(g: Guest) -> Self {
        Self {
            id: g.id.to_string(),
            name: g.name,
            pronoun: g.pronoun,
            email: g.email,
            phone: g.phone,
            birth_date: g.birth_date.map(|d| d.to_string()),
            cpf: g.cpf,
            created_at: g.created_at.timestamp(),
            active: g.active,
        }
    }
}
