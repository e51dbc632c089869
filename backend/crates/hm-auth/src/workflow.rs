//! Credential workflow: registration, login, password change, token
//! refresh and account deactivation over an [`IdentityStore`].
//!
//! Every call is independent; there is no in-process session state. The
//! store's unique indexes remain the source of truth for email/CPF
//! uniqueness - the pre-checks here only produce friendlier errors ahead
//! of the authoritative conflict.

use crate::{AuthError, Result as AuthErrorResult, TokenService, password};

use hm_core::{Guest, IdentityStore};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use uuid::Uuid;

/// Registration input. The password arrives in plaintext and leaves this
/// module only as a digest; strength is checked at the caller boundary.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub pronoun: Option<String>,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub cpf: Option<String>,
}

/// An authenticated session: the guest (hash never serialized) and the
/// bearer token representing it
#[derive(Debug, Clone)]
pub struct Session {
    pub guest: Guest,
    pub token: String,
}

pub struct CredentialWorkflow<S> {
    store: S,
    tokens: TokenService,
}

impl<S: IdentityStore> CredentialWorkflow<S> {
    pub fn new(store: S, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Register a new guest and issue a first token.
    ///
    /// Uniqueness only binds among active guests, so a deactivated account
    /// holding the same email or CPF does not block registration.
    pub async fn register(&self, reg: Registration) -> AuthErrorResult<Session> {
        if let Some(existing) = self.store.find_by_email(&reg.email).await? {
            if existing.active {
                return Err(AuthError::DuplicateEmail {
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        if let Some(ref cpf) = reg.cpf {
            if let Some(existing) = self.store.find_by_cpf(cpf).await? {
                if existing.active {
                    return Err(AuthError::DuplicateCpf {
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        let digest = password::hash(&reg.password)?;

        let mut guest = Guest::new(reg.name, reg.email, digest);
        guest.pronoun = reg.pronoun;
        guest.phone = reg.phone;
        guest.birth_date = reg.birth_date;
        guest.cpf = reg.cpf;

        self.store.insert(&guest).await?;

        let token = self.tokens.issue(&guest)?;
        Ok(Session { guest, token })
    }

    /// Authenticate by email and password.
    ///
    /// Unknown email and wrong password produce the same error; a correct
    /// password against a deactivated account reports the deactivation.
    pub async fn login(&self, email: &str, pass: &str) -> AuthErrorResult<Session> {
        let guest = self
            .store
            .find_by_email(email)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !password::verify(pass, &guest.password_hash) {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !guest.active {
            return Err(AuthError::InactiveAccount {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token = self.tokens.issue(&guest)?;
        Ok(Session { guest, token })
    }

    /// Replace the password after verifying the current one. The new
    /// password is assumed already strength-checked by the caller boundary.
    pub async fn change_password(
        &self,
        guest_id: Uuid,
        current: &str,
        next: &str,
    ) -> AuthErrorResult<()> {
        let guest = self
            .store
            .find_by_id(guest_id)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !password::verify(current, &guest.password_hash) {
            return Err(AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let digest = password::hash(next)?;
        self.store.update_password(guest_id, &digest).await?;

        Ok(())
    }

    /// Verify a token and issue a fresh one with a new expiry (sliding
    /// window renewal, not token chaining)
    pub async fn refresh(&self, token: &str) -> AuthErrorResult<Session> {
        let claims = self.tokens.verify(token)?;
        let guest_id = claims.guest_id()?;

        let guest = self
            .store
            .find_by_id(guest_id)
            .await?
            .filter(|g| g.active)
            .ok_or_else(|| AuthError::InvalidCredentials {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let fresh = self.tokens.issue(&guest)?;
        Ok(Session {
            guest,
            token: fresh,
        })
    }

    /// Soft-deactivate an account. Outstanding tokens are not revoked; they
    /// expire naturally.
    pub async fn deactivate(&self, guest_id: Uuid, actor_id: Uuid) -> AuthErrorResult<()> {
        self.store.soft_deactivate(guest_id, actor_id).await?;
        Ok(())
    }
}
