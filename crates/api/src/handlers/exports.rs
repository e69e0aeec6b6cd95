//! Handlers for the project report downloads.
//!
//! Both reports run through the same visibility scope as the project
//! listing, so a download never contains rows the list would hide. The
//! spreadsheet honors the list filters and has no row cap; the PDF is a
//! fixed snapshot of the newest twenty visible projects.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use chrono::Utc;
use sirius_core::access::project_scope;
use sirius_db::models::project::ProjectFilter;
use sirius_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::export::pdf::build_projects_document;
use crate::export::xlsx::build_projects_workbook;
use crate::handlers::matched_client_id;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Row cap for the PDF table.
const PDF_MAX_ROWS: i64 = 20;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// GET /proyectos/exportar-excel/
pub async fn excel(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<impl IntoResponse> {
    let matched = matched_client_id(&state.pool, &identity).await?;
    let scope = project_scope(&identity, matched);
    let rows = ProjectRepo::export_rows(&state.pool, scope, &filter, None).await?;

    let bytes = build_projects_workbook(&rows)
        .map_err(|e| AppError::InternalError(format!("Workbook assembly error: {e}")))?;
    let filename = format!(
        "proyectos_sirius_{}.xlsx",
        Utc::now().format("%Y%m%d_%H%M%S")
    );

    tracing::info!(rows = rows.len(), user_id = identity.user_id, "Spreadsheet export");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    ))
}

/// GET /proyectos/exportar-pdf/
///
/// Unfiltered: the PDF always reports the default view of the caller's
/// visible projects.
pub async fn pdf(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> AppResult<impl IntoResponse> {
    let matched = matched_client_id(&state.pool, &identity).await?;
    let scope = project_scope(&identity, matched);
    let rows = ProjectRepo::export_rows(
        &state.pool,
        scope,
        &ProjectFilter::default(),
        Some(PDF_MAX_ROWS),
    )
    .await?;

    let bytes = build_projects_document(&rows)
        .map_err(|e| AppError::InternalError(format!("Document assembly error: {e}")))?;

    tracing::info!(rows = rows.len(), user_id = identity.user_id, "PDF export");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"proyectos_sirius.pdf\"".to_string(),
            ),
        ],
        bytes,
    ))
}
