//! Incident entity model, DTOs and list filter.

use serde::{Deserialize, Serialize};
use sirius_core::types::{DbId, IncidentKind, IncidentPriority, IncidentStatus, Timestamp};
use sqlx::FromRow;

/// An incident row from the `incidents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub kind: IncidentKind,
    #[sqlx(try_from = "String")]
    pub priority: IncidentPriority,
    #[sqlx(try_from = "String")]
    pub status: IncidentStatus,
    pub reported_by: Option<DbId>,
    pub assigned_to: Option<DbId>,
    pub reported_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub resolution: String,
    pub attachment: Option<String>,
}

/// DTO for reporting an incident. Status always starts at `open`;
/// the reporter comes from the authenticated identity. `attachment`
/// carries a stored filename (upload storage is external).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIncident {
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub kind: IncidentKind,
    #[serde(default)]
    pub priority: IncidentPriority,
    pub assigned_to: Option<DbId>,
    pub attachment: Option<String>,
}

/// Resolution form payload: any status may be submitted, with optional
/// narrative text.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveIncident {
    pub status: IncidentStatus,
    #[serde(default)]
    pub resolution: String,
}

/// Optional list filters, all combinable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentFilter {
    pub project: Option<DbId>,
    pub kind: Option<IncidentKind>,
    pub status: Option<IncidentStatus>,
    pub priority: Option<IncidentPriority>,
}
