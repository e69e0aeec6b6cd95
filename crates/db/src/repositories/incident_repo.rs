//! Repository for the `incidents` table.

use sirius_core::types::{DbId, IncidentStatus, Timestamp};
use sqlx::PgPool;

use crate::models::incident::{CreateIncident, Incident, IncidentFilter};

const COLUMNS: &str = "id, project_id, title, description, kind, priority, status, \
                       reported_by, assigned_to, reported_at, resolved_at, resolution, \
                       attachment";

/// Optional filter predicate shared by the list and count queries.
///
/// Bind order: $1 project, $2 kind, $3 status, $4 priority.
const FILTER_WHERE: &str = "($1::BIGINT IS NULL OR project_id = $1)
       AND ($2::TEXT IS NULL OR kind = $2)
       AND ($3::TEXT IS NULL OR status = $3)
       AND ($4::TEXT IS NULL OR priority = $4)";

/// Provides create, read and resolve operations for incidents.
pub struct IncidentRepo;

impl IncidentRepo {
    /// Report a new incident. Status starts at `open`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIncident,
        reported_by: DbId,
    ) -> Result<Incident, sqlx::Error> {
        let query = format!(
            "INSERT INTO incidents (project_id, title, description, kind, priority,
                                    assigned_to, attachment, reported_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.kind.as_str())
            .bind(input.priority.as_str())
            .bind(input.assigned_to)
            .bind(&input.attachment)
            .bind(reported_by)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM incidents WHERE id = $1");
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of incidents narrowed by `filter`, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &IncidentFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents
             WHERE {FILTER_WHERE}
             ORDER BY reported_at DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(filter.project)
            .bind(filter.kind.map(|k| k.as_str()))
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of incidents the list query would return before paging.
    pub async fn count(pool: &PgPool, filter: &IncidentFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM incidents WHERE {FILTER_WHERE}");
        sqlx::query_scalar(&query)
            .bind(filter.project)
            .bind(filter.kind.map(|k| k.as_str()))
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.priority.map(|p| p.as_str()))
            .fetch_one(pool)
            .await
    }

    /// Apply a resolution form submission. The caller computes the
    /// resolved-at stamp from the current row before calling.
    pub async fn resolve(
        pool: &PgPool,
        id: DbId,
        status: IncidentStatus,
        resolution: &str,
        resolved_at: Option<Timestamp>,
    ) -> Result<Option<Incident>, sqlx::Error> {
        let query = format!(
            "UPDATE incidents
             SET status = $2, resolution = $3, resolved_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(id)
            .bind(status.as_str())
            .bind(resolution)
            .bind(resolved_at)
            .fetch_optional(pool)
            .await
    }

    /// The `limit` newest incidents of one project (project detail).
    pub async fn recent_for_project(
        pool: &PgPool,
        project_id: DbId,
        limit: i64,
    ) -> Result<Vec<Incident>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incidents
             WHERE project_id = $1
             ORDER BY reported_at DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, Incident>(&query)
            .bind(project_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of incidents still open or being worked on (dashboard).
    pub async fn count_open(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM incidents WHERE status IN ('open', 'in_progress')")
            .fetch_one(pool)
            .await
    }
}
