//! Handler for the landing dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sirius_core::types::ProjectStatus;
use sirius_db::models::project::Project;
use sirius_db::models::service::Service;
use sirius_db::repositories::{ClientRepo, IncidentRepo, ProjectRepo, ServiceRepo};

use crate::error::AppResult;
use crate::middleware::auth::OptionalUser;
use crate::state::AppState;

/// Rows shown in the recent-projects panel.
const RECENT_PROJECTS: i64 = 5;

/// Rows shown in the service showcase.
const FEATURED_SERVICES: i64 = 4;

/// Dashboard payload. Anonymous callers get the zeroed shape.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_projects: i64,
    pub active_projects: i64,
    pub total_clients: i64,
    pub open_incidents: i64,
    pub recent_projects: Vec<Project>,
    pub services: Vec<Service>,
}

/// GET /
///
/// Landing statistics. Counts and lists are populated only for
/// authenticated callers; anonymous ones get zeros and empty lists
/// rather than a 401.
pub async fn dashboard(
    State(state): State<AppState>,
    OptionalUser(identity): OptionalUser,
) -> AppResult<Json<DashboardResponse>> {
    if identity.is_none() {
        return Ok(Json(DashboardResponse {
            total_projects: 0,
            active_projects: 0,
            total_clients: 0,
            open_incidents: 0,
            recent_projects: Vec::new(),
            services: Vec::new(),
        }));
    }

    let total_projects = ProjectRepo::count_total(&state.pool).await?;
    let active_projects =
        ProjectRepo::count_in_status(&state.pool, ProjectStatus::InProgress).await?;
    let total_clients = ClientRepo::count_active(&state.pool).await?;
    let open_incidents = IncidentRepo::count_open(&state.pool).await?;
    let recent_projects = ProjectRepo::recent(&state.pool, RECENT_PROJECTS).await?;
    let services = ServiceRepo::featured(&state.pool, FEATURED_SERVICES).await?;

    Ok(Json(DashboardResponse {
        total_projects,
        active_projects,
        total_clients,
        open_incidents,
        recent_projects,
        services,
    }))
}
