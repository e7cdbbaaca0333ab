//! Repository for the name-only tables (`directors`, `genres`).
//!
//! Every method takes the [`EntityDescriptor`] of the table it works on.
//! Table names come from the static descriptors, never from request input.

use cinema_core::entity::EntityDescriptor;
use cinema_core::types::DbId;
use sqlx::PgPool;

use crate::models::named::NamedRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for directors and genres.
pub struct NamedEntityRepo;

impl NamedEntityRepo {
    /// Insert a new row, returning its id.
    pub async fn create(
        pool: &PgPool,
        descriptor: &EntityDescriptor,
        name: &str,
    ) -> Result<DbId, sqlx::Error> {
        let query = format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", descriptor.table);
        let (id,): (DbId,) = sqlx::query_as(&query).bind(name).fetch_one(pool).await?;
        Ok(id)
    }

    /// Find a row by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        descriptor: &EntityDescriptor,
        id: DbId,
    ) -> Result<Option<NamedRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = $1", descriptor.table);
        sqlx::query_as::<_, NamedRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rows ordered by ID ascending.
    pub async fn list(
        pool: &PgPool,
        descriptor: &EntityDescriptor,
    ) -> Result<Vec<NamedRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY id ASC", descriptor.table);
        sqlx::query_as::<_, NamedRow>(&query).fetch_all(pool).await
    }

    /// Replace the name of an existing row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        descriptor: &EntityDescriptor,
        id: DbId,
        name: &str,
    ) -> Result<Option<NamedRow>, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET name = $2 WHERE id = $1 RETURNING {COLUMNS}",
            descriptor.table
        );
        sqlx::query_as::<_, NamedRow>(&query)
            .bind(id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a row by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while movies still reference it.
    pub async fn delete(
        pool: &PgPool,
        descriptor: &EntityDescriptor,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", descriptor.table);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        let deleted = result.rows_affected() > 0;
        if !deleted {
            tracing::debug!(entity = descriptor.entity, id, "Delete matched no row");
        }
        Ok(deleted)
    }
}
