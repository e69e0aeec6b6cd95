//! Handlers for the project portfolio (`/proyectos/...`).
//!
//! Listings are scoped by the caller's role: client-role callers see
//! their matched client's projects, non-staff employees the projects
//! they are responsible for, staff everything. Detail reads stay
//! unscoped.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use sirius_core::access::project_scope;
use sirius_core::error::CoreError;
use sirius_core::types::DbId;
use sirius_core::validate::{validate_project, FieldError};
use sirius_db::models::budget::Budget;
use sirius_db::models::incident::Incident;
use sirius_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use sirius_db::repositories::{BudgetRepo, IncidentRepo, ProjectRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::handlers::matched_client_id;
use crate::middleware::auth::AuthUser;
use crate::query::{page_window, PageParams, PAGE_SIZE};
use crate::response::Paginated;
use crate::state::AppState;

/// Incidents shown inline on the project detail page.
const RECENT_INCIDENTS: i64 = 5;

/// Project detail payload: the row plus its linked collections.
#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub service_ids: Vec<DbId>,
    pub budgets: Vec<Budget>,
    pub recent_incidents: Vec<Incident>,
}

/// GET /proyectos/
///
/// One page of visible projects, newest first, after applying the
/// optional filters (client, status, priority, date window, responsible).
pub async fn list(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(filter): Query<ProjectFilter>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Project>>> {
    let matched = matched_client_id(&state.pool, &identity).await?;
    let scope = project_scope(&identity, matched);
    let total = ProjectRepo::count(&state.pool, scope, &filter).await?;
    let (page, pages, offset) = page_window(total, params.page);
    let items = ProjectRepo::list(&state.pool, scope, &filter, PAGE_SIZE, offset).await?;
    Ok(Json(Paginated {
        items,
        total,
        page,
        pages,
    }))
}

/// GET /proyectos/{id}/
pub async fn detail(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let service_ids = ProjectRepo::service_ids(&state.pool, id).await?;
    let budgets = BudgetRepo::list_for_project(&state.pool, id).await?;
    let recent_incidents =
        IncidentRepo::recent_for_project(&state.pool, id, RECENT_INCIDENTS).await?;
    Ok(Json(ProjectDetailResponse {
        project,
        service_ids,
        budgets,
        recent_incidents,
    }))
}

/// POST /proyectos/crear/
pub async fn create(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project(&input.name, &input.description, input.total_budget)?;
    ensure_active_responsible(&state.pool, input.responsible_id).await?;
    let project = ProjectRepo::create(&state.pool, &input, identity.user_id).await?;
    tracing::info!(project_id = project.id, user_id = identity.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// POST /proyectos/{id}/editar/
///
/// Full-field replace, including the closing fields (`actual_end_date`,
/// `actual_cost`) and the service links.
pub async fn edit(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    validate_project(&input.name, &input.description, input.total_budget)?;
    ensure_active_responsible(&state.pool, input.responsible_id).await?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// The responsible assignee must be an active account. Inactive and
/// unknown ids are both reported as a field error, not a bare FK
/// violation.
async fn ensure_active_responsible(
    pool: &PgPool,
    responsible_id: Option<DbId>,
) -> Result<(), AppError> {
    if let Some(id) = responsible_id {
        if !UserRepo::exists_active(pool, id).await? {
            return Err(AppError::Validation(vec![FieldError::new(
                "responsible_id",
                "Responsible must be an active user account",
            )]));
        }
    }
    Ok(())
}
