//! Repository for the `budgets` table.
//!
//! Budgets are append-only. Number assignment happens inside the insert
//! transaction so two concurrent creations can never draw the same
//! sequence value.

use chrono::{Datelike, Utc};
use sirius_core::access::BudgetScope;
use sirius_core::numbering::budget_number;
use sirius_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{Budget, CreateBudget};

const COLUMNS: &str = "id, client_id, project_id, number, description, total_amount, \
                       issue_date, validity_days, status, notes, created_by, created_at";

fn scope_binds(scope: BudgetScope) -> (Option<DbId>, bool) {
    match scope {
        BudgetScope::All => (None, false),
        BudgetScope::Client(id) => (Some(id), false),
        BudgetScope::Nothing => (None, true),
    }
}

/// Provides create and read operations for budgets.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert a new budget. A blank `number` draws the next value from
    /// the per-year counter; an explicit one is stored verbatim and the
    /// unique constraint rejects duplicates.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBudget,
        created_by: DbId,
    ) -> Result<Budget, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let number = match input.number.as_deref().map(str::trim) {
            Some(explicit) if !explicit.is_empty() => explicit.to_string(),
            _ => {
                let year = Utc::now().year();
                let seq: i64 = sqlx::query_scalar(
                    "INSERT INTO budget_sequences (year, last_seq) VALUES ($1, 1)
                     ON CONFLICT (year) DO UPDATE
                         SET last_seq = budget_sequences.last_seq + 1
                     RETURNING last_seq",
                )
                .bind(year)
                .fetch_one(&mut *tx)
                .await?;
                let number = budget_number(year, seq);
                tracing::debug!(%number, "Assigned budget number");
                number
            }
        };

        let query = format!(
            "INSERT INTO budgets (client_id, project_id, number, description, total_amount,
                                  issue_date, validity_days, status, notes, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let budget = sqlx::query_as::<_, Budget>(&query)
            .bind(input.client_id)
            .bind(input.project_id)
            .bind(&number)
            .bind(&input.description)
            .bind(input.total_amount)
            .bind(input.issue_date)
            .bind(input.validity_days)
            .bind(input.status.as_str())
            .bind(&input.notes)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(budget)
    }

    /// Find a budget by ID. Detail reads are unscoped.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of budgets visible to `scope`, newest first.
    pub async fn list(
        pool: &PgPool,
        scope: BudgetScope,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Budget>, sqlx::Error> {
        let (scope_client, scope_nothing) = scope_binds(scope);
        let query = format!(
            "SELECT {COLUMNS} FROM budgets
             WHERE ($1::BIGINT IS NULL OR client_id = $1) AND NOT $2
             ORDER BY created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(scope_client)
            .bind(scope_nothing)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of budgets the list query would return before paging.
    pub async fn count(pool: &PgPool, scope: BudgetScope) -> Result<i64, sqlx::Error> {
        let (scope_client, scope_nothing) = scope_binds(scope);
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM budgets
             WHERE ($1::BIGINT IS NULL OR client_id = $1) AND NOT $2",
        )
        .bind(scope_client)
        .bind(scope_nothing)
        .fetch_one(pool)
        .await
    }

    /// All budgets attached to a project, newest first (project detail).
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Budget>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM budgets WHERE project_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Budget>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
