//! Route definition for the landing dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET /  -> dashboard (public, reduced payload when anonymous)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home::dashboard))
}
