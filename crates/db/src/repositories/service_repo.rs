//! Repository for the `services` table.

use folio_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use super::ordering;
use crate::models::service::{CreateService, Service, UpdateService};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, short_description, description, icon, image_path, \
    starting_price, price_unit, features, technologies, delivery_time, \
    sort_order, is_active, is_featured, created_at, updated_at";

/// Provides CRUD operations for the services catalog.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Insert a new service with an already-resolved slug.
    ///
    /// Without an explicit `sort_order` the service is appended to the end.
    pub async fn create(
        pool: &PgPool,
        input: &CreateService,
        slug: &str,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services \
                (title, slug, short_description, description, icon, starting_price, price_unit, \
                 features, technologies, delivery_time, sort_order, is_active, is_featured) \
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5, $6, $7, \
                     COALESCE($8, '[]'::jsonb), COALESCE($9, '[]'::jsonb), $10, \
                     COALESCE($11, {next}), COALESCE($12, true), COALESCE($13, false)) \
             RETURNING {COLUMNS}",
            next = ordering::next_sort_order_sql("services"),
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(&input.title)
            .bind(slug)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.starting_price)
            .bind(&input.price_unit)
            .bind(input.features.as_ref().map(Json))
            .bind(input.technologies.as_ref().map(Json))
            .bind(&input.delivery_time)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active service by slug (public detail page).
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM services WHERE slug = $1 AND is_active = true");
        sqlx::query_as::<_, Service>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List services ordered by sort_order, optionally including inactive ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Service>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id")
        } else {
            format!("SELECT {COLUMNS} FROM services WHERE is_active = true ORDER BY sort_order, id")
        };
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Active services flagged as featured, for the home page.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services \
             WHERE is_active = true AND is_featured = true \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Update a service. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                title = COALESCE($2, title), \
                slug = COALESCE($3, slug), \
                short_description = COALESCE($4, short_description), \
                description = COALESCE($5, description), \
                icon = COALESCE($6, icon), \
                starting_price = COALESCE($7, starting_price), \
                price_unit = COALESCE($8, price_unit), \
                features = COALESCE($9, features), \
                technologies = COALESCE($10, technologies), \
                delivery_time = COALESCE($11, delivery_time), \
                sort_order = COALESCE($12, sort_order), \
                is_active = COALESCE($13, is_active), \
                is_featured = COALESCE($14, is_featured) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.short_description)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.starting_price)
            .bind(&input.price_unit)
            .bind(input.features.as_ref().map(Json))
            .bind(input.technologies.as_ref().map(Json))
            .bind(&input.delivery_time)
            .bind(input.sort_order)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service, returning the removed row (its image path is
    /// needed to clean up storage).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("DELETE FROM services WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Rewrite sort_order from the given id order. `false` if any id is unknown.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<bool, sqlx::Error> {
        ordering::reorder(pool, "services", ids).await
    }

    /// Flip `is_active`.
    pub async fn toggle_active(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET is_active = NOT is_active WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_featured`.
    pub async fn toggle_featured(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET is_featured = NOT is_featured WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store a new image path.
    pub async fn set_image_path(
        pool: &PgPool,
        id: DbId,
        path: &str,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query =
            format!("UPDATE services SET image_path = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Service>(&query)
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
            "SELECT EXISTS(SELECT 1 FROM services WHERE slug = $1 AND ($2::bigint IS NULL OR id <> $2))",
        )
        .bind(slug)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }

    /// Total number of services.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM services")
            .fetch_one(pool)
            .await
    }
}
