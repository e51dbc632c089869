use hm_core::Guest;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A guest with a distinct email and a fixed creation instant, so listing
/// order is deterministic across test rows
pub fn sample_guest(email: &str, created_at_secs: i64) -> Guest {
    let mut guest = Guest::new(
        "Ana Souza".to_string(),
        email.to_string(),
        "$argon2id$test-digest".to_string(),
    );
    guest.created_at = DateTime::from_timestamp(created_at_secs, 0).unwrap_or_else(Utc::now);
    guest
}
