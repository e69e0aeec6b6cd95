//! Route definitions for the service catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET  /servicios/               -> list (active catalog, unpaginated)
/// POST /servicios/crear/         -> create (staff only)
/// POST /servicios/{id}/editar/   -> edit
/// POST /servicios/{id}/eliminar/ -> remove (staff only, soft)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/servicios/", get(services::list))
        .route("/servicios/crear/", post(services::create))
        .route("/servicios/{id}/editar/", post(services::edit))
        .route("/servicios/{id}/eliminar/", post(services::remove))
}
