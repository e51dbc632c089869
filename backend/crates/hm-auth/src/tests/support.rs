//! In-memory identity store for workflow tests.

use hm_core::{Guest, GuestUpdate, IdentityStore, StoreError, StoreResult};

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// Behaves like the SQLite store: finders prefer the active row for an
/// email/cpf, and insert enforces uniqueness among active guests.
#[derive(Default)]
pub struct MemoryStore {
    guests: Mutex<Vec<Guest>>,
}

impl MemoryStore {
    pub fn guest(&self, id: Uuid) -> Option<Guest> {
        self.guests.lock().unwrap().iter().find(|g| g.id == id).cloned()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Guest>> {
        Ok(self.guest(id))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Guest>> {
        let guests = self.guests.lock().unwrap();
        let mut matches: Vec<&Guest> = guests.iter().filter(|g| g.email == email).collect();
        matches.sort_by_key(|g| !g.active);
        Ok(matches.first().map(|g| (*g).clone()))
    }

    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Guest>> {
        let guests = self.guests.lock().unwrap();
        let mut matches: Vec<&Guest> =
            guests.iter().filter(|g| g.cpf.as_deref() == Some(cpf)).collect();
        matches.sort_by_key(|g| !g.active);
        Ok(matches.first().map(|g| (*g).clone()))
    }

    async fn insert(&self, guest: &Guest) -> StoreResult<()> {
        let mut guests = self.guests.lock().unwrap();

        if guests.iter().any(|g| g.active && g.email == guest.email) {
            return Err(StoreError::DuplicateEmail);
        }
        if let Some(ref cpf) = guest.cpf {
            if guests.iter().any(|g| g.active && g.cpf.as_deref() == Some(cpf)) {
                return Err(StoreError::DuplicateCpf);
            }
        }

        guests.push(guest.clone());
        Ok(())
    }

    async fn update_fields(&self, id: Uuid, update: &GuestUpdate) -> StoreResult<Guest> {
        let mut guests = self.guests.lock().unwrap();
        let guest = guests
            .iter_mut()
            .find(|g| g.id == id && g.active)
            .ok_or(StoreError::NotFound)?;

        if let Some(ref name) = update.name {
            guest.name = name.clone();
        }
        if let Some(ref pronoun) = update.pronoun {
            guest.pronoun = Some(pronoun.clone());
        }
        if let Some(ref email) = update.email {
            guest.email = email.clone();
        }
        if let Some(ref phone) = update.phone {
            guest.phone = Some(phone.clone());
        }
        if let Some(birth_date) = update.birth_date {
            guest.birth_date = Some(birth_date);
        }
        if let Some(ref cpf) = update.cpf {
            guest.cpf = Some(cpf.clone());
        }

        Ok(guest.clone())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<()> {
        let mut guests = self.guests.lock().unwrap();
        let guest = guests
            .iter_mut()
            .find(|g| g.id == id && g.active)
            .ok_or(StoreError::NotFound)?;

        guest.password_hash = password_hash.to_string();
        Ok(())
    }

    async fn soft_deactivate(&self, id: Uuid, actor: Uuid) -> StoreResult<()> {
        let mut guests = self.guests.lock().unwrap();
        let guest = guests
            .iter_mut()
            .find(|g| g.id == id && g.active)
            .ok_or(StoreError::NotFound)?;

        guest.active = false;
        guest.deleted_at = Some(Utc::now());
        guest.deleted_by = Some(actor);
        Ok(())
    }
}
