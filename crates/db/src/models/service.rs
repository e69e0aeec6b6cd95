//! Service catalog model and DTOs.

use serde::{Deserialize, Serialize};
use sirius_core::types::{DbId, ServiceKind, Timestamp};
use sqlx::FromRow;

/// A service row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub kind: ServiceKind,
    pub description: String,
    pub base_price: f64,
    pub active: bool,
    pub created_at: Timestamp,
}

/// Create/edit payload; `active` is owned by soft delete.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    pub kind: ServiceKind,
    pub description: String,
    pub base_price: f64,
}
