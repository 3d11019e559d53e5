//! Repository for the `testimonials` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use super::ordering;
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, client_name, client_position, client_company, content, rating, \
    image_path, is_featured, sort_order, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                (client_name, client_position, client_company, content, rating, is_featured, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 5), COALESCE($6, false), COALESCE($7, {next})) \
             RETURNING {COLUMNS}",
            next = ordering::next_sort_order_sql("testimonials"),
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.client_name)
            .bind(&input.client_position)
            .bind(&input.client_company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY sort_order, id");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Featured testimonials for the home page.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials WHERE is_featured = true ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count featured testimonials, excluding `exclude_id` when given.
    pub async fn count_featured(pool: &PgPool, exclude_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM testimonials \
             WHERE is_featured = true AND ($1::bigint IS NULL OR id <> $1)",
        )
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Update a testimonial. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                client_name = COALESCE($2, client_name), \
                client_position = COALESCE($3, client_position), \
                client_company = COALESCE($4, client_company), \
                content = COALESCE($5, content), \
                rating = COALESCE($6, rating), \
                is_featured = COALESCE($7, is_featured), \
                sort_order = COALESCE($8, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.client_name)
            .bind(&input.client_position)
            .bind(&input.client_company)
            .bind(&input.content)
            .bind(input.rating)
            .bind(input.is_featured)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("DELETE FROM testimonials WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        ordering::reorder(pool, "testimonials", ids).await
    }

    /// Set `is_featured` explicitly.
    pub async fn set_featured(
        pool: &PgPool,
        id: DbId,
        featured: bool,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query =
            format!("UPDATE testimonials SET is_featured = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(featured)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        path: &str,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query =
            format!("UPDATE testimonials SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(path)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }
}
