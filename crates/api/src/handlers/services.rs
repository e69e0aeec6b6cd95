//! Handlers for the service catalog (`/servicios/...`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sirius_core::error::CoreError;
use sirius_core::types::DbId;
use sirius_core::validate::validate_service;
use sirius_db::models::service::{Service, ServiceInput};
use sirius_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// GET /servicios/
///
/// The full active catalog in (kind, name) order, unpaginated.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
) -> AppResult<Json<Vec<Service>>> {
    let services = ServiceRepo::list_active(&state.pool).await?;
    Ok(Json(services))
}

/// POST /servicios/crear/  (staff only)
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(identity): RequireStaff,
    Json(input): Json<ServiceInput>,
) -> AppResult<(StatusCode, Json<Service>)> {
    validate_service(&input.name, &input.description, input.base_price)?;
    let service = ServiceRepo::create(&state.pool, &input).await?;
    tracing::info!(service_id = service.id, user_id = identity.user_id, "Service created");
    Ok((StatusCode::CREATED, Json(service)))
}

/// POST /servicios/{id}/editar/
///
/// Any authenticated caller may edit; only create and delete carry the
/// staff gate.
pub async fn edit(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ServiceInput>,
) -> AppResult<Json<Service>> {
    validate_service(&input.name, &input.description, input.base_price)?;
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}

/// POST /servicios/{id}/eliminar/  (staff only, soft)
pub async fn remove(
    State(state): State<AppState>,
    RequireStaff(identity): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existed = ServiceRepo::soft_delete(&state.pool, id).await?;
    if !existed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }));
    }
    tracing::info!(service_id = id, user_id = identity.user_id, "Service deactivated");
    Ok(StatusCode::NO_CONTENT)
}
