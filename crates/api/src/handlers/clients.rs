//! Handlers for the client registry (`/clientes/...`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sirius_core::error::CoreError;
use sirius_core::types::DbId;
use sirius_core::validate::validate_client;
use sirius_db::models::client::{Client, ClientInput};
use sirius_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::query::{page_window, PageParams, PAGE_SIZE};
use crate::response::Paginated;
use crate::state::AppState;

/// GET /clientes/
///
/// One page of active clients in name order. Soft-deleted clients are
/// hidden here but still reachable by id.
pub async fn list(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<Client>>> {
    let total = ClientRepo::count_active(&state.pool).await?;
    let (page, pages, offset) = page_window(total, params.page);
    let items = ClientRepo::list(&state.pool, PAGE_SIZE, offset).await?;
    Ok(Json(Paginated {
        items,
        total,
        page,
        pages,
    }))
}

/// POST /clientes/crear/
pub async fn create(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(input): Json<ClientInput>,
) -> AppResult<(StatusCode, Json<Client>)> {
    validate_client(
        &input.name,
        &input.rut,
        &input.email,
        &input.phone,
        &input.address,
    )?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, user_id = identity.user_id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// POST /clientes/{id}/editar/
///
/// Full-field replace. The edit form re-submits every field, so partial
/// payloads are rejected at deserialization.
pub async fn edit(
    State(state): State<AppState>,
    AuthUser(_identity): AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<ClientInput>,
) -> AppResult<Json<Client>> {
    validate_client(
        &input.name,
        &input.rut,
        &input.email,
        &input.phone,
        &input.address,
    )?;
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// POST /clientes/{id}/eliminar/
///
/// Staff only. Soft delete: the row keeps its references and drops out
/// of listings.
pub async fn remove(
    State(state): State<AppState>,
    RequireStaff(identity): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existed = ClientRepo::soft_delete(&state.pool, id).await?;
    if !existed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }));
    }
    tracing::info!(client_id = id, user_id = identity.user_id, "Client deactivated");
    Ok(StatusCode::NO_CONTENT)
}
