//! Repository for the `skills` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordering;
use crate::models::skill::{CreateSkill, Skill, UpdateSkill};

const COLUMNS: &str =
    "id, name, proficiency, category, icon, display_type, is_visible, sort_order, created_at, updated_at";

/// Provides CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill with an already-validated display type.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSkill,
        display_type: &str,
    ) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, proficiency, category, icon, display_type, is_visible, sort_order) \
             VALUES ($1, $2, COALESCE($3, 'general'), $4, $5, COALESCE($6, true), COALESCE($7, {next})) \
             RETURNING {COLUMNS}",
            next = ordering::next_sort_order_sql("skills"),
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.name)
            .bind(input.proficiency)
            .bind(&input.category)
            .bind(&input.icon)
            .bind(display_type)
            .bind(input.is_visible)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every skill, grouped by display type then sort order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY display_type, sort_order, id");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Visible skills of one display bucket, in display order.
    pub async fn list_visible(pool: &PgPool, display_type: &str) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills \
             WHERE display_type = $1 AND is_visible = true \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(display_type)
            .fetch_all(pool)
            .await
    }

    /// Count visible skills in a bucket, excluding `exclude_id` when given.
    pub async fn count_visible(
        pool: &PgPool,
        display_type: &str,
        exclude_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM skills \
             WHERE display_type = $1 AND is_visible = true AND ($2::bigint IS NULL OR id <> $2)",
        )
        .bind(display_type)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update a skill. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET \
                name = COALESCE($2, name), \
                proficiency = COALESCE($3, proficiency), \
                category = COALESCE($4, category), \
                icon = COALESCE($5, icon), \
                display_type = COALESCE($6, display_type), \
                is_visible = COALESCE($7, is_visible), \
                sort_order = COALESCE($8, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.proficiency)
            .bind(&input.category)
            .bind(&input.icon)
            .bind(&input.display_type)
            .bind(input.is_visible)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rewrite sort_order from the given id order. `false` if any id is unknown.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        ordering::reorder(pool, "skills", ids).await
    }

    /// Set `is_visible` explicitly.
    pub async fn set_visible(
        pool: &PgPool,
        id: DbId,
        visible: bool,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("UPDATE skills SET is_visible = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(visible)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await
    }
}
