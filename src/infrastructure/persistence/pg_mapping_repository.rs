//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;

/// PostgreSQL repository for mapping storage and retrieval.
///
/// `short_hash` is the primary key; the unique constraint on `original_url`
/// doubles as the reverse index used for idempotent shortening. Queries are
/// bound at runtime, so no database is needed at compile time.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MappingRow {
    short_hash: String,
    original_url: String,
    registered_at: DateTime<Utc>,
}

impl From<MappingRow> for Mapping {
    fn from(row: MappingRow) -> Self {
        Mapping::new(row.short_hash, row.original_url, row.registered_at)
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn find_by_hash(&self, short_hash: &str) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_hash, original_url, registered_at
            FROM mappings
            WHERE short_hash = $1
            "#,
        )
        .bind(short_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<Mapping>, AppError> {
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT short_hash, original_url, registered_at
            FROM mappings
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn try_insert(&self, new_mapping: NewMapping) -> Result<Option<Mapping>, AppError> {
        // ON CONFLICT DO NOTHING covers both unique constraints, so a racing
        // shorten for the same URL or a hash collision yields None instead of
        // overwriting an existing record.
        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            INSERT INTO mappings (short_hash, original_url, registered_at)
            VALUES ($1, $2, $3)
            ON CONFLICT DO NOTHING
            RETURNING short_hash, original_url, registered_at
            "#,
        )
        .bind(&new_mapping.short_hash)
        .bind(&new_mapping.original_url)
        .bind(new_mapping.registered_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Mapping::from))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
