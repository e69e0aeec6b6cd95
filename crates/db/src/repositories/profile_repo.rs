//! Repository for the `user_profiles` table.

use sirius_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{ProfileInput, UserProfile};

const COLUMNS: &str = "id, user_id, role, phone, company, rut, address, avatar, active, created_at";

/// Provides profile lookup and edits. Every account gets a profile on
/// first touch; the default role is `client`.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile for an account, creating a default one if none
    /// exists yet. The no-op conflict update makes RETURNING yield the
    /// existing row, so concurrent callers all see the same profile.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id) VALUES ($1)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Full-field write of an account's profile, creating the row when
    /// it does not exist yet.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        input: &ProfileInput,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (user_id, role, phone, company, rut, address, avatar)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id) DO UPDATE SET
                role = EXCLUDED.role,
                phone = EXCLUDED.phone,
                company = EXCLUDED.company,
                rut = EXCLUDED.rut,
                address = EXCLUDED.address,
                avatar = EXCLUDED.avatar
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(user_id)
            .bind(input.role.as_str())
            .bind(&input.phone)
            .bind(&input.company)
            .bind(&input.rut)
            .bind(&input.address)
            .bind(&input.avatar)
            .fetch_one(pool)
            .await
    }
}
