//! Handlers for project incidents (`/incidencias/...`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use sirius_core::error::CoreError;
use sirius_core::lifecycle::resolved_at_after;
use sirius_core::types::DbId;
use sirius_core::validate::validate_incident;
use sirius_db::models::incident::{CreateIncident, Incident, IncidentFilter, ResolveIncident};
use sirius_db::repositories::IncidentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{page_window, PageParams, PAGE_SIZE};
use crate::response::Paginated;
use crate::state::AppState;

/// GET /incidencias/
///
/// One page of incidents, newest report first, after the optional
/// filters (project, kind, status, priority). Incident listings are
/// not role-scoped.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Query(filter): Query<IncidentFilter>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Incident>>> {
    let total = IncidentRepo::count(&state.pool, &filter).await?;
    let (page, pages, offset) = page_window(total, params.page);
    let items = IncidentRepo::list(&state.pool, &filter, PAGE_SIZE, offset).await?;
    Ok(Json(Paginated {
        items,
        total,
        page,
        pages,
    }))
}

/// POST /incidencias/crear/
///
/// New incidents always start at status `open`; the reporter is the
/// authenticated caller.
pub async fn create(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(input): Json<CreateIncident>,
) -> AppResult<(StatusCode, Json<Incident>)> {
    validate_incident(&input.title, &input.description)?;
    let incident = IncidentRepo::create(&state.pool, &input, identity.user_id).await?;
    tracing::info!(
        incident_id = incident.id,
        project_id = incident.project_id,
        user_id = identity.user_id,
        "Incident reported"
    );
    Ok((StatusCode::CREATED, Json(incident)))
}

/// POST /incidencias/{id}/resolver/
///
/// Any status may be submitted. Terminal statuses (`resolved`, `closed`)
/// stamp `resolved_at` with the current time, re-resolving included;
/// moving back to an open status keeps the previous stamp.
pub async fn resolve(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ResolveIncident>,
) -> AppResult<Json<Incident>> {
    let existing = IncidentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;
    let resolved_at = resolved_at_after(existing.resolved_at, input.status, Utc::now());
    let incident = IncidentRepo::resolve(&state.pool, id, input.status, &input.resolution, resolved_at)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Incident",
            id,
        }))?;
    tracing::info!(
        incident_id = id,
        status = incident.status.as_str(),
        user_id = identity.user_id,
        "Incident resolution updated"
    );
    Ok(Json(incident))
}
