//! Repository for the `users` table.

use sirius_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, ProfileInput, User, UserProfile};

const COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
                       is_staff, is_active, created_at";

/// Provides account lookup and registration.
pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up an account for login. Inactive accounts are returned so
    /// the caller can distinguish a bad username from a disabled one.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Whether an active account with this ID exists. Used to vet the
    /// responsible assignee on project forms.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND is_active)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Create an account together with its profile in one transaction.
    /// Registration never grants staff privileges.
    pub async fn register(
        pool: &PgPool,
        account: &CreateUser,
        profile: &ProfileInput,
    ) -> Result<(User, UserProfile), sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO users (username, email, password_hash, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .fetch_one(&mut *tx)
            .await?;

        let row = sqlx::query_as::<_, UserProfile>(
            "INSERT INTO user_profiles (user_id, role, phone, company, rut, address, avatar)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, user_id, role, phone, company, rut, address, avatar, active, created_at",
        )
        .bind(user.id)
        .bind(profile.role.as_str())
        .bind(&profile.phone)
        .bind(&profile.company)
        .bind(&profile.rut)
        .bind(&profile.address)
        .bind(&profile.avatar)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok((user, row))
    }
}
