//! Repository for the `projects` table and its service links.

use sirius_core::access::ProjectScope;
use sirius_core::types::{DbId, ProjectStatus};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::project::{
    CreateProject, Project, ProjectExportRow, ProjectFilter, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, client_id, description, start_date, estimated_end_date, \
                       actual_end_date, status, priority, total_budget, actual_cost, \
                       responsible_id, created_by, created_at, updated_at";

/// Scope + filter predicate shared by the list, count and export queries
/// so all three see exactly the same subset.
///
/// Bind order: $1 scope client, $2 scope responsible, $3 scope empty-set
/// flag, $4 filter client, $5 status, $6 priority, $7 started on/after,
/// $8 estimated end on/before, $9 responsible.
const VISIBLE_WHERE: &str = "($1::BIGINT IS NULL OR client_id = $1)
       AND ($2::BIGINT IS NULL OR responsible_id = $2)
       AND NOT $3
       AND ($4::BIGINT IS NULL OR client_id = $4)
       AND ($5::TEXT IS NULL OR status = $5)
       AND ($6::TEXT IS NULL OR priority = $6)
       AND ($7::DATE IS NULL OR start_date >= $7)
       AND ($8::DATE IS NULL OR estimated_end_date <= $8)
       AND ($9::BIGINT IS NULL OR responsible_id = $9)";

/// Decompose a scope into its three NULL-guarded binds.
fn scope_binds(scope: ProjectScope) -> (Option<DbId>, Option<DbId>, bool) {
    match scope {
        ProjectScope::All => (None, None, false),
        ProjectScope::Client(id) => (Some(id), None, false),
        ProjectScope::Responsible(id) => (None, Some(id), false),
        ProjectScope::Nothing => (None, None, true),
    }
}

/// Provides CRUD operations for projects. Projects are never deleted.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project and its service links in one transaction,
    /// returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        created_by: DbId,
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO projects (name, client_id, description, start_date, estimated_end_date,
                                   status, priority, total_budget, responsible_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.estimated_end_date)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .bind(input.total_budget)
            .bind(input.responsible_id)
            .bind(created_by)
            .fetch_one(&mut *tx)
            .await?;
        link_services(&mut tx, project.id, &input.service_ids).await?;
        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by ID. Detail reads are unscoped.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of the services linked to a project.
    pub async fn service_ids(pool: &PgPool, project_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT service_id FROM project_services WHERE project_id = $1 ORDER BY service_id",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// One page of projects visible to `scope`, narrowed by `filter`,
    /// newest first.
    pub async fn list(
        pool: &PgPool,
        scope: ProjectScope,
        filter: &ProjectFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let (scope_client, scope_responsible, scope_nothing) = scope_binds(scope);
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE {VISIBLE_WHERE}
             ORDER BY created_at DESC
             LIMIT $10 OFFSET $11"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(scope_client)
            .bind(scope_responsible)
            .bind(scope_nothing)
            .bind(filter.client)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(filter.start_date)
            .bind(filter.end_date)
            .bind(filter.responsible)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Number of projects the list query would return before paging.
    pub async fn count(
        pool: &PgPool,
        scope: ProjectScope,
        filter: &ProjectFilter,
    ) -> Result<i64, sqlx::Error> {
        let (scope_client, scope_responsible, scope_nothing) = scope_binds(scope);
        let query = format!("SELECT COUNT(*) FROM projects WHERE {VISIBLE_WHERE}");
        sqlx::query_scalar(&query)
            .bind(scope_client)
            .bind(scope_responsible)
            .bind(scope_nothing)
            .bind(filter.client)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(filter.start_date)
            .bind(filter.end_date)
            .bind(filter.responsible)
            .fetch_one(pool)
            .await
    }

    /// Full-field update plus service-link replacement, in one
    /// transaction. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "UPDATE projects SET
                name = $2,
                client_id = $3,
                description = $4,
                start_date = $5,
                estimated_end_date = $6,
                status = $7,
                priority = $8,
                total_budget = $9,
                responsible_id = $10,
                actual_end_date = $11,
                actual_cost = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_id)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.estimated_end_date)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .bind(input.total_budget)
            .bind(input.responsible_id)
            .bind(input.actual_end_date)
            .bind(input.actual_cost)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM project_services WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        link_services(&mut tx, id, &input.service_ids).await?;
        tx.commit().await?;
        Ok(Some(project))
    }

    /// The `limit` newest projects, unscoped (dashboard).
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of projects, unscoped (dashboard).
    pub async fn count_total(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Number of projects in one status, unscoped (dashboard).
    pub async fn count_in_status(pool: &PgPool, status: ProjectStatus) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Joined rows for the exporters, same visibility predicate as
    /// [`Self::list`], newest first, optionally capped.
    pub async fn export_rows(
        pool: &PgPool,
        scope: ProjectScope,
        filter: &ProjectFilter,
        limit: Option<i64>,
    ) -> Result<Vec<ProjectExportRow>, sqlx::Error> {
        let (scope_client, scope_responsible, scope_nothing) = scope_binds(scope);
        let query = format!(
            "SELECT p.id, p.name, c.name AS client_name, c.rut AS client_rut,
                    p.status, p.priority, p.start_date, p.estimated_end_date,
                    p.total_budget, u.username AS responsible_username
             FROM projects p
             JOIN clients c ON c.id = p.client_id
             LEFT JOIN users u ON u.id = p.responsible_id
             WHERE {VISIBLE_WHERE}
             ORDER BY p.created_at DESC
             LIMIT $10"
        );
        sqlx::query_as::<_, ProjectExportRow>(&query)
            .bind(scope_client)
            .bind(scope_responsible)
            .bind(scope_nothing)
            .bind(filter.client)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(filter.start_date)
            .bind(filter.end_date)
            .bind(filter.responsible)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}

/// Insert the join rows for a project's services.
async fn link_services(
    tx: &mut Transaction<'_, Postgres>,
    project_id: DbId,
    service_ids: &[DbId],
) -> Result<(), sqlx::Error> {
    for service_id in service_ids {
        sqlx::query(
            "INSERT INTO project_services (project_id, service_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(service_id)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}
