//! Project entity model, DTOs, list filter and export row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sirius_core::types::{DbId, ProjectPriority, ProjectStatus, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub client_id: DbId,
    pub description: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub actual_end_date: Option<NaiveDate>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    #[sqlx(try_from = "String")]
    pub priority: ProjectPriority,
    pub total_budget: f64,
    pub actual_cost: Option<f64>,
    pub responsible_id: Option<DbId>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project. The creator comes from the authenticated
/// identity, never the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub client_id: DbId,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
    pub description: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: ProjectPriority,
    pub total_budget: f64,
    pub responsible_id: Option<DbId>,
}

/// DTO for editing a project: the create field set plus the closing
/// fields (`actual_end_date`, `actual_cost`), which have no other write
/// path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: String,
    pub client_id: DbId,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
    pub description: String,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: ProjectPriority,
    pub total_budget: f64,
    pub responsible_id: Option<DbId>,
    pub actual_end_date: Option<NaiveDate>,
    pub actual_cost: Option<f64>,
}

/// Optional list filters, all combinable. Dates narrow to projects
/// starting on/after `start_date` and estimated to end on/before
/// `end_date`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    pub client: Option<DbId>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub responsible: Option<DbId>,
}

/// Joined row feeding the spreadsheet/PDF exporters: project fields plus
/// the client display columns and the responsible username.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectExportRow {
    pub id: DbId,
    pub name: String,
    pub client_name: String,
    pub client_rut: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    #[sqlx(try_from = "String")]
    pub priority: ProjectPriority,
    pub start_date: NaiveDate,
    pub estimated_end_date: NaiveDate,
    pub total_budget: f64,
    pub responsible_username: Option<String>,
}

impl ProjectExportRow {
    /// Client display form, mirroring [`crate::models::client::Client::display_name`].
    pub fn client_display(&self) -> String {
        format!("{} - {}", self.client_name, self.client_rut)
    }
}
