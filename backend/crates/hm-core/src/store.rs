//! Persistence collaborator for guest identities.
//!
//! The store owns the uniqueness invariant: email and cpf must be unique
//! among active guests, enforced at the storage layer. Callers may pre-check
//! for friendlier errors but must treat an insert/update conflict as the
//! authoritative answer.

use crate::{Guest, GuestUpdate};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Email already in use")]
    DuplicateEmail,

    #[error("CPF already in use")]
    DuplicateCpf,

    #[error("Guest not found")]
    NotFound,

    #[error("Store backend error: {message}")]
    Backend { message: String },
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Identity persistence interface. Lookups only ever return active guests;
/// deactivated rows are invisible to every finder.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Guest>>;

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Guest>>;

    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Guest>>;

    async fn insert(&self, guest: &Guest) -> StoreResult<()>;

    /// Apply a partial profile update and return the updated guest
    async fn update_fields(&self, id: Uuid, update: &GuestUpdate) -> StoreResult<Guest>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<()>;

    /// Soft delete: flip `active`, stamp `deleted_at`/`deleted_by`
    async fn soft_deactivate(&self, id: Uuid, actor: Uuid) -> StoreResult<()>;
}
