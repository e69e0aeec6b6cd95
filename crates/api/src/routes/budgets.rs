//! Route definitions for budgets. No edit or delete: budgets are
//! append-only.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::budgets;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET  /presupuestos/       -> list (scoped, paginated)
/// POST /presupuestos/crear/ -> create
/// GET  /presupuestos/{id}/  -> detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/presupuestos/", get(budgets::list))
        .route("/presupuestos/crear/", post(budgets::create))
        .route("/presupuestos/{id}/", get(budgets::detail))
}
