//! Route definitions for the project portfolio, including the report
//! downloads.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{exports, projects};
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET  /proyectos/                 -> list (scoped, filtered, paginated)
/// POST /proyectos/crear/           -> create
/// GET  /proyectos/exportar-excel/  -> excel (scoped, filtered)
/// GET  /proyectos/exportar-pdf/    -> pdf (scoped snapshot)
/// GET  /proyectos/{id}/            -> detail
/// POST /proyectos/{id}/editar/     -> edit
/// ```
///
/// The export paths are static segments, so they win over the `{id}`
/// capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/proyectos/", get(projects::list))
        .route("/proyectos/crear/", post(projects::create))
        .route("/proyectos/exportar-excel/", get(exports::excel))
        .route("/proyectos/exportar-pdf/", get(exports::pdf))
        .route("/proyectos/{id}/", get(projects::detail))
        .route("/proyectos/{id}/editar/", post(projects::edit))
}
