//! Repository for the `services` table.

use sirius_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{Service, ServiceInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, kind, description, base_price, active, created_at";

/// Provides CRUD operations for the service catalog.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, input: &ServiceInput) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (name, kind, description, base_price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.name)
            .bind(input.kind.as_str())
            .bind(&input.description)
            .bind(input.base_price)
            .fetch_one(pool)
            .await
    }

    /// Find a service by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All active services in catalog order (kind, then name). The
    /// catalog is small enough that the listing is not paginated.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE active ORDER BY kind, name");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// The first `limit` active services in catalog order (dashboard).
    pub async fn featured(pool: &PgPool, limit: i64) -> Result<Vec<Service>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM services WHERE active ORDER BY kind, name LIMIT $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Full-field update. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ServiceInput,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET
                name = $2,
                kind = $3,
                description = $4,
                base_price = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.kind.as_str())
            .bind(&input.description)
            .bind(input.base_price)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a service by clearing its active flag. Returns `true`
    /// if the row exists; deactivating an already-inactive service is a
    /// no-op success.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE services SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
