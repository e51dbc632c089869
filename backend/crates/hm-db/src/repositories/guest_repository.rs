//! Guest repository for CRUD operations on guest accounts.
//!
//! Every query goes through runtime-bound statements; the partial unique
//! indexes on (email) and (cpf) over active rows are the authoritative
//! uniqueness check, surfaced as `DbError::UniqueViolation`.

use crate::{DbError, Result as DbErrorResult};

use hm_core::{Guest, GuestUpdate, IdentityStore, StoreResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, name, pronoun, email, password_hash, phone, \
     birth_date, cpf, created_at, active, deleted_at, deleted_by";

/// One page of active guests, newest first
#[derive(Debug)]
pub struct GuestPage {
    pub guests: Vec<Guest>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: i64,
}

#[derive(Clone)]
pub struct GuestRepository {
    pool: SqlitePool,
}

impl GuestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, guest: &Guest) -> DbErrorResult<()> {
        let id = guest.id.to_string();
        let birth_date = guest.birth_date.map(|d| d.to_string());
        let created_at = guest.created_at.timestamp();
        let deleted_at = guest.deleted_at.map(|dt| dt.timestamp());
        let deleted_by = guest.deleted_by.map(|u| u.to_string());

        sqlx::query(
            r#"
                INSERT INTO guests (
                    id, name, pronoun, email, password_hash, phone,
                    birth_date, cpf, created_at, active, deleted_at, deleted_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&guest.name)
        .bind(&guest.pronoun)
        .bind(&guest.email)
        .bind(&guest.password_hash)
        .bind(&guest.phone)
        .bind(birth_date)
        .bind(&guest.cpf)
        .bind(created_at)
        .bind(guest.active)
        .bind(deleted_at)
        .bind(deleted_by)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Guest>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM guests WHERE id = ?"
        ))
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| guest_from_row(&r)).transpose()
    }

    /// Find by email. When a deactivated row and an active row share an
    /// email, the active one wins.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Guest>> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM guests WHERE email = ? \
             ORDER BY active DESC, created_at DESC LIMIT 1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| guest_from_row(&r)).transpose()
    }

    pub async fn find_by_cpf(&self, cpf: &str) -> DbErrorResult<Option<Guest>> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM guests WHERE cpf = ? \
             ORDER BY active DESC, created_at DESC LIMIT 1"
        ))
        .bind(cpf)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| guest_from_row(&r)).transpose()
    }

    /// Paginated listing of active guests, newest first
    pub async fn find_page(&self, page: u32, limit: u32) -> DbErrorResult<GuestPage> {
        let page = page.max(1);
        let limit = limit.max(1);
        let offset = i64::from(page - 1) * i64::from(limit);

        let rows = sqlx::query(&format!(
            "SELECT {SELECT_COLUMNS} FROM guests WHERE active = 1 \
             ORDER BY created_at DESC LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let guests = rows
            .iter()
            .map(guest_from_row)
            .collect::<DbErrorResult<Vec<Guest>>>()?;

        let total = self.count_active().await?;
        let total_pages = (total + i64::from(limit) - 1) / i64::from(limit);

        Ok(GuestPage {
            guests,
            total,
            page,
            limit,
            total_pages,
        })
    }

    pub async fn count_active(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) FROM guests WHERE active = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get(0)?)
    }

    /// Apply a partial profile update to an active guest and return the
    /// updated row
    pub async fn update_fields(&self, id: Uuid, update: &GuestUpdate) -> DbErrorResult<Guest> {
        if update.is_empty() {
            return Err(DbError::EmptyUpdate {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let birth_date = update.birth_date.map(|d| d.to_string());

        let mut builder: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE guests SET ");
        {
            let mut fields = builder.separated(", ");
            if let Some(ref name) = update.name {
                fields.push("name = ");
                fields.push_bind_unseparated(name);
            }
            if let Some(ref pronoun) = update.pronoun {
                fields.push("pronoun = ");
                fields.push_bind_unseparated(pronoun);
            }
            if let Some(ref email) = update.email {
                fields.push("email = ");
                fields.push_bind_unseparated(email);
            }
            if let Some(ref phone) = update.phone {
                fields.push("phone = ");
                fields.push_bind_unseparated(phone);
            }
            if let Some(ref birth_date) = birth_date {
                fields.push("birth_date = ");
                fields.push_bind_unseparated(birth_date);
            }
            if let Some(ref cpf) = update.cpf {
                fields.push("cpf = ");
                fields.push_bind_unseparated(cpf);
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id.to_string());
        builder.push(" AND active = 1");

        let result = builder.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.find_by_id(id).await?.ok_or_else(|| DbError::NotFound {
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> DbErrorResult<()> {
        let id_str = id.to_string();

        let result = sqlx::query("UPDATE guests SET password_hash = ? WHERE id = ? AND active = 1")
            .bind(password_hash)
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Soft delete: flip `active` and stamp who removed the account when
    pub async fn soft_deactivate(&self, id: Uuid, actor: Uuid) -> DbErrorResult<()> {
        let id_str = id.to_string();
        let actor_str = actor.to_string();
        let deleted_at = Utc::now().timestamp();

        let result = sqlx::query(
            "UPDATE guests SET active = 0, deleted_at = ?, deleted_by = ? \
             WHERE id = ? AND active = 1",
        )
        .bind(deleted_at)
        .bind(actor_str)
        .bind(id_str)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn guest_from_row(row: &SqliteRow) -> DbErrorResult<Guest> {
    let id: String = row.try_get("id")?;
    let birth_date: Option<String> = row.try_get("birth_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;
    let deleted_by: Option<String> = row.try_get("deleted_by")?;

    let id = Uuid::parse_str(&id).map_err(|e| DbError::Corrupt {
        message: format!("Invalid UUID in guests.id: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let birth_date = birth_date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|e| DbError::Corrupt {
                message: format!("Invalid date in guests.birth_date: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    let created_at = DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::Corrupt {
        message: "Invalid timestamp in guests.created_at".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let deleted_by = deleted_by
        .map(|u| {
            Uuid::parse_str(&u).map_err(|e| DbError::Corrupt {
                message: format!("Invalid UUID in guests.deleted_by: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()?;

    Ok(Guest {
        id,
        name: row.try_get("name")?,
        pronoun: row.try_get("pronoun")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        phone: row.try_get("phone")?,
        birth_date,
        cpf: row.try_get("cpf")?,
        created_at,
        active: row.try_get("active")?,
        deleted_at: deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        deleted_by,
    })
}

/// The repository doubles as the workflow's identity store; DbError maps
/// into StoreError at this boundary.
#[async_trait]
impl IdentityStore for GuestRepository {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Guest>> {
        Ok(GuestRepository::find_by_id(self, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Guest>> {
        Ok(GuestRepository::find_by_email(self, email).await?)
    }

    async fn find_by_cpf(&self, cpf: &str) -> StoreResult<Option<Guest>> {
        Ok(GuestRepository::find_by_cpf(self, cpf).await?)
    }

    async fn insert(&self, guest: &Guest) -> StoreResult<()> {
        Ok(GuestRepository::create(self, guest).await?)
    }

    async fn update_fields(&self, id: Uuid, update: &GuestUpdate) -> StoreResult<Guest> {
        Ok(GuestRepository::update_fields(self, id, update).await?)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> StoreResult<()> {
        Ok(GuestRepository::update_password(self, id, password_hash).await?)
    }

    async fn soft_deactivate(&self, id: Uuid, actor: Uuid) -> StoreResult<()> {
        Ok(GuestRepository::soft_deactivate(self, id, actor).await?)
    }
}
