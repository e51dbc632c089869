//! Guest entity - the persisted account record of a hotel guest.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A guest account. Removal is always a soft delete: `active` flips to
/// false and `deleted_at`/`deleted_by` record when and by whom.
///
/// `password_hash` never leaves the trust boundary - it is skipped on
/// serialization and no DTO carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    /// Preferred pronoun, free-form (e.g., "she/her")
    pub pronoun: Option<String>,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    /// Brazilian national identity number, digits only once persisted
    pub cpf: Option<String>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>,
}

impl Guest {
    /// Create a new active guest with the optional profile fields unset
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            pronoun: None,
            email,
            password_hash,
            phone: None,
            birth_date: None,
            cpf: None,
            created_at: Utc::now(),
            active: true,
            deleted_at: None,
            deleted_by: None,
        }
    }

    /// Check if the account has been soft-deleted
    pub fn is_deactivated(&self) -> bool {
        !self.active
    }
}
