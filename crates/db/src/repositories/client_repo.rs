//! Repository for the `clients` table.

use sirius_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, ClientInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rut, email, phone, address, client_type, active, registered_at";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// Insert a new client, returning the created row.
    pub async fn create(pool: &PgPool, input: &ClientInput) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (name, rut, email, phone, address, client_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(&input.name)
            .bind(&input.rut)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.client_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a client by ID. Inactive rows are still found; only listings
    /// hide them.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// First client whose email matches, by name order, active or not.
    /// Feeds the access filter's client-role branch.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE email = $1 ORDER BY name, id LIMIT 1");
        sqlx::query_as::<_, Client>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// One page of active clients ordered by name.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients WHERE active ORDER BY name LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of active clients (pagination and the dashboard count).
    pub async fn count_active(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE active")
            .fetch_one(pool)
            .await
    }

    /// Full-field update. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ClientInput,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET
                name = $2,
                rut = $3,
                email = $4,
                phone = $5,
                address = $6,
                client_type = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.rut)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(input.client_type.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a client by clearing its active flag. Returns `true`
    /// if the row exists; deactivating an already-inactive client is a
    /// no-op success.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE clients SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
