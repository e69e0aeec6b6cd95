//! Account and profile models and DTOs.

use serde::{Deserialize, Serialize};
use sirius_core::types::{DbId, Timestamp, UserRole};
use sqlx::FromRow;

/// Full account row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            is_staff: user.is_staff,
        }
    }
}

/// DTO for inserting an account row. The hash is produced by the HTTP
/// layer; registration never carries staff privileges.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// One profile row per account, from the `user_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    pub role: UserRole,
    pub phone: String,
    pub company: String,
    pub rut: String,
    pub address: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// Profile edit payload. The role field is editable by the profile owner.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rut: String,
    #[serde(default)]
    pub address: String,
    pub avatar: Option<String>,
}
