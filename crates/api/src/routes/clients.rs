//! Route definitions for the client registry.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET  /clientes/               -> list (paginated)
/// POST /clientes/crear/         -> create
/// POST /clientes/{id}/editar/   -> edit
/// POST /clientes/{id}/eliminar/ -> remove (staff only, soft)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clientes/", get(clients::list))
        .route("/clientes/crear/", post(clients::create))
        .route("/clientes/{id}/editar/", post(clients::edit))
        .route("/clientes/{id}/eliminar/", post(clients::remove))
}
