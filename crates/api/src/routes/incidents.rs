//! Route definitions for project incidents. Incidents have no detail
//! page; the listing and the project detail carry them.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::incidents;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET  /incidencias/                -> list (filtered, paginated)
/// POST /incidencias/crear/          -> create
/// POST /incidencias/{id}/resolver/  -> resolve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/incidencias/", get(incidents::list))
        .route("/incidencias/crear/", post(incidents::create))
        .route("/incidencias/{id}/resolver/", post(incidents::resolve))
}
