//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use super::ordering;
use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, summary, description, category, status, technologies, \
    image_path, demo_url, repository_url, client_name, completion_date, \
    sort_order, is_featured, is_published, created_at, updated_at";

/// Provides CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with an already-resolved slug and status.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        slug: &str,
        status: &str,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                (title, slug, summary, description, category, status, technologies, \
                 demo_url, repository_url, client_name, completion_date, \
                 sort_order, is_featured, is_published) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5, $6, \
                     COALESCE($7, '[]'::jsonb), $8, $9, $10, $11, \
                     COALESCE($12, {next}), COALESCE($13, false), COALESCE($14, true)) \
             RETURNING {COLUMNS}",
            next = ordering::next_sort_order_sql("projects"),
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(&input.category)
            .bind(status)
            .bind(input.technologies.as_ref().map(Json))
            .bind(&input.demo_url)
            .bind(&input.repository_url)
            .bind(&input.client_name)
            .bind(input.completion_date)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published project by slug (public detail page).
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE slug = $1 AND is_published = true");
        sqlx::query_as::<_, Project>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List every project (admin view), ordered by sort_order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY sort_order, id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List published projects, optionally restricted to one category
    /// (compared case-insensitively, like filter category values).
    pub async fn list_published(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE is_published = true AND ($1::text IS NULL OR lower(category) = lower($1)) \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Published projects flagged as featured, for the home page.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE is_published = true AND is_featured = true \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                summary = COALESCE($4, summary), \
                description = COALESCE($5, description), \
                category = COALESCE($6, category), \
                status = COALESCE($7, status), \
                technologies = COALESCE($8, technologies), \
                demo_url = COALESCE($9, demo_url), \
                repository_url = COALESCE($10, repository_url), \
                client_name = COALESCE($11, client_name), \
                completion_date = COALESCE($12, completion_date), \
                sort_order = COALESCE($13, sort_order), \
                is_featured = COALESCE($14, is_featured), \
                is_published = COALESCE($15, is_published) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.status)
            .bind(input.technologies.as_ref().map(Json))
            .bind(&input.demo_url)
            .bind(&input.repository_url)
            .bind(&input.client_name)
            .bind(input.completion_date)
            .bind(input.sort_order)
            .bind(input.is_featured)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("DELETE FROM projects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rewrite sort_order from the given id order. `false` if any id is unknown.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        ordering::reorder(pool, "projects", ids).await
    }

    /// Flip `is_featured`.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET is_featured = NOT is_featured WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_published`.
    pub async fn toggle_published(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET is_published = NOT is_published WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store a new image path.
    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        path: &str,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query =
            format!("UPDATE projects SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(path)
            .fetch_optional(pool)
            .await
    }

    /// Whether `slug` is taken by a row other than `exclude_id`.
    pub async fn slug_exists(
        pool: &PgPool,
        slug: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Total number of projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
