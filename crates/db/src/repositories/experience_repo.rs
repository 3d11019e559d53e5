//! Repository for the `experiences` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordering;
use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

const COLUMNS: &str = "id, company, position, location, employment_type, description, \
    start_date, end_date, is_current, sort_order, created_at, updated_at";

/// Provides CRUD operations for work experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert a new entry. A current position never stores an end date.
    pub async fn create(pool: &PgPool, input: &CreateExperience) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences \
                (company, position, location, employment_type, description, \
                 start_date, end_date, is_current, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), $6, \
                     CASE WHEN $8 THEN NULL ELSE $7 END, $8, COALESCE($9, {next})) \
             RETURNING {COLUMNS}",
            next = ordering::next_sort_order_sql("experiences"),
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List entries by sort order, most recent start first within a tie.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM experiences ORDER BY sort_order, start_date DESC, id"
        );
        sqlx::query_as::<_, Experience>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. Only non-`None` fields are applied; turning
    /// `is_current` on clears the end date.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET \
                company = COALESCE($2, company), \
                position = COALESCE($3, position), \
                location = COALESCE($4, location), \
                employment_type = COALESCE($5, employment_type), \
                description = COALESCE($6, description), \
                start_date = COALESCE($7, start_date), \
                end_date = CASE WHEN COALESCE($9, is_current) THEN NULL \
                                ELSE COALESCE($8, end_date) END, \
                is_current = COALESCE($9, is_current), \
                sort_order = COALESCE($10, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.location)
            .bind(&input.employment_type)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_current)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        ordering::reorder(pool, "experiences", ids).await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await
    }
}
