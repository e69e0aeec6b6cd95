//! Request handlers, one module per resource.
//!
//! Handlers validate payloads with `sirius_core::validate`, delegate to
//! the repositories in `sirius_db` and map failures via [`AppError`].
//! Listing handlers derive the caller's visibility scope before querying.
//!
//! [`AppError`]: crate::error::AppError

use sirius_core::identity::Identity;
use sirius_core::types::{DbId, UserRole};
use sirius_db::repositories::ClientRepo;
use sqlx::PgPool;

pub mod accounts;
pub mod budgets;
pub mod calc;
pub mod clients;
pub mod exports;
pub mod home;
pub mod incidents;
pub mod projects;
pub mod services;

/// Resolve the Client row a client-role caller is matched to, by email.
/// Non-client roles never match, so the lookup is skipped for them.
pub(crate) async fn matched_client_id(
    pool: &PgPool,
    identity: &Identity,
) -> Result<Option<DbId>, sqlx::Error> {
    if identity.role != UserRole::Client {
        return Ok(None);
    }
    Ok(ClientRepo::find_by_email(pool, &identity.email)
        .await?
        .map(|client| client.id))
}
