//! Budget entity model and DTO.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sirius_core::types::{BudgetStatus, DbId, Timestamp};
use sqlx::FromRow;

/// A budget row from the `budgets` table. Budgets are append-only: no
/// update or delete DTOs exist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub client_id: DbId,
    pub project_id: Option<DbId>,
    pub number: String,
    pub description: String,
    pub total_amount: f64,
    pub issue_date: NaiveDate,
    pub validity_days: i32,
    #[sqlx(try_from = "String")]
    pub status: BudgetStatus,
    pub notes: String,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

fn default_validity_days() -> i32 {
    30
}

/// DTO for creating a budget. An absent/empty `number` triggers
/// sequential assignment; an explicit one is stored verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudget {
    pub client_id: DbId,
    pub project_id: Option<DbId>,
    pub number: Option<String>,
    pub description: String,
    pub total_amount: f64,
    pub issue_date: NaiveDate,
    #[serde(default = "default_validity_days")]
    pub validity_days: i32,
    #[serde(default)]
    pub status: BudgetStatus,
    #[serde(default)]
    pub notes: String,
}
