//! Handlers for budgets/quotes (`/presupuestos/...`).
//!
//! Budgets are append-only: create and read, no edit or delete routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sirius_core::access::budget_scope;
use sirius_core::error::CoreError;
use sirius_core::types::DbId;
use sirius_core::validate::validate_budget;
use sirius_db::models::budget::{Budget, CreateBudget};
use sirius_db::repositories::BudgetRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::matched_client_id;
use crate::middleware::auth::AuthUser;
use crate::query::{page_window, PageParams, PAGE_SIZE};
use crate::response::Paginated;
use crate::state::AppState;

/// GET /presupuestos/
///
/// One page of visible budgets, newest first. Client-role callers see
/// their matched client's budgets; everyone else sees all of them.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Budget>>> {
    let matched = matched_client_id(&state.pool, &identity).await?;
    let scope = budget_scope(&identity, matched);
    let total = BudgetRepo::count(&state.pool, scope).await?;
    let (page, pages, offset) = page_window(total, params.page);
    let items = BudgetRepo::list(&state.pool, scope, PAGE_SIZE, offset).await?;
    Ok(Json(Paginated {
        items,
        total,
        page,
        pages,
    }))
}

/// POST /presupuestos/crear/
///
/// An absent or blank `number` gets the next `PRES-{year}-{seq}` for the
/// issue year; an explicit number is stored verbatim and may collide
/// (409).
pub async fn create(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(input): Json<CreateBudget>,
) -> AppResult<(StatusCode, Json<Budget>)> {
    validate_budget(&input.description, input.total_amount, input.validity_days)?;
    let budget = BudgetRepo::create(&state.pool, &input, identity.user_id).await?;
    tracing::info!(
        budget_id = budget.id,
        number = %budget.number,
        user_id = identity.user_id,
        "Budget created"
    );
    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET /presupuestos/{id}/
pub async fn detail(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Budget>> {
    let budget = BudgetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Budget",
            id,
        }))?;
    Ok(Json(budget))
}
