//! Route definition for the budget-total AJAX helper.

use axum::routing::post;
use axum::Router;

use crate::handlers::calc;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// POST /ajax/calcular-total/ -> total
/// ```
///
/// POST only; other methods answer 405.
pub fn router() -> Router<AppState> {
    Router::new().route("/ajax/calcular-total/", post(calc::total))
}
