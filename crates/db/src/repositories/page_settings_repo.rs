//! Repositories for the `services_management` and `projects_management`
//! singleton tables.

use folio_core::defaults;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::page_settings::{
    ProjectsManagement, ServicesManagement, UpdateProjectsManagement, UpdateServicesManagement,
};

const SERVICES_COLUMNS: &str = "id, page_title, page_subtitle, page_description, \
    process_title, process_subtitle, work_process_steps, \
    cta_title, cta_description, cta_button_text, created_at, updated_at";

const PROJECTS_COLUMNS: &str = "id, page_title, page_subtitle, page_description, \
    filter_categories, cta_title, cta_description, cta_button_text, created_at, updated_at";

/// Services page settings.
pub struct ServicesManagementRepo;

impl ServicesManagementRepo {
    /// Return the most recently updated row, inserting defaults if none exists.
    pub async fn get_or_create(pool: &PgPool) -> Result<ServicesManagement, sqlx::Error> {
        let query = format!(
            "SELECT {SERVICES_COLUMNS} FROM services_management \
             ORDER BY updated_at DESC, id DESC LIMIT 1"
        );
        if let Some(row) = sqlx::query_as::<_, ServicesManagement>(&query)
            .fetch_optional(pool)
            .await?
        {
            return Ok(row);
        }

        tracing::info!("No services page settings found, creating defaults");
        let insert = format!(
            "INSERT INTO services_management \
                (page_title, page_subtitle, page_description, process_title, process_subtitle, \
                 work_process_steps, cta_title, cta_description, cta_button_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {SERVICES_COLUMNS}"
        );
        sqlx::query_as::<_, ServicesManagement>(&insert)
            .bind(defaults::SERVICES_PAGE_TITLE)
            .bind(defaults::SERVICES_PAGE_SUBTITLE)
            .bind(defaults::SERVICES_PAGE_DESCRIPTION)
            .bind(defaults::SERVICES_PROCESS_TITLE)
            .bind(defaults::SERVICES_PROCESS_SUBTITLE)
            .bind(Json(defaults::process_steps()))
            .bind(defaults::SERVICES_CTA_TITLE)
            .bind(defaults::SERVICES_CTA_DESCRIPTION)
            .bind(defaults::SERVICES_CTA_BUTTON_TEXT)
            .fetch_one(pool)
            .await
    }

    /// Patch the services page settings. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateServicesManagement,
    ) -> Result<ServicesManagement, sqlx::Error> {
        let current = Self::get_or_create(pool).await?;
        let query = format!(
            "UPDATE services_management SET \
                page_title = COALESCE($2, page_title), \
                page_subtitle = COALESCE($3, page_subtitle), \
                page_description = COALESCE($4, page_description), \
                process_title = COALESCE($5, process_title), \
                process_subtitle = COALESCE($6, process_subtitle), \
                work_process_steps = COALESCE($7, work_process_steps), \
                cta_title = COALESCE($8, cta_title), \
                cta_description = COALESCE($9, cta_description), \
                cta_button_text = COALESCE($10, cta_button_text) \
             WHERE id = $1 \
             RETURNING {SERVICES_COLUMNS}"
        );
        sqlx::query_as::<_, ServicesManagement>(&query)
            .bind(current.id)
            .bind(&input.page_title)
            .bind(&input.page_subtitle)
            .bind(&input.page_description)
            .bind(&input.process_title)
            .bind(&input.process_subtitle)
            .bind(input.work_process_steps.as_ref().map(Json))
            .bind(&input.cta_title)
            .bind(&input.cta_description)
            .bind(&input.cta_button_text)
            .fetch_one(pool)
            .await
    }
}

/// Projects page settings.
pub struct ProjectsManagementRepo;

impl ProjectsManagementRepo {
    /// Return the most recently updated row, inserting defaults if none exists.
    pub async fn get_or_create(pool: &PgPool) -> Result<ProjectsManagement, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTS_COLUMNS} FROM projects_management \
             ORDER BY updated_at DESC, id DESC LIMIT 1"
        );
        if let Some(row) = sqlx::query_as::<_, ProjectsManagement>(&query)
            .fetch_optional(pool)
            .await?
        {
            return Ok(row);
        }

        tracing::info!("No projects page settings found, creating defaults");
        let insert = format!(
            "INSERT INTO projects_management \
                (page_title, page_subtitle, page_description, filter_categories, \
                 cta_title, cta_description, cta_button_text) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PROJECTS_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectsManagement>(&insert)
            .bind(defaults::PROJECTS_PAGE_TITLE)
            .bind(defaults::PROJECTS_PAGE_SUBTITLE)
            .bind(defaults::PROJECTS_PAGE_DESCRIPTION)
            .bind(Json(defaults::filter_categories()))
            .bind(defaults::PROJECTS_CTA_TITLE)
            .bind(defaults::PROJECTS_CTA_DESCRIPTION)
            .bind(defaults::PROJECTS_CTA_BUTTON_TEXT)
            .fetch_one(pool)
            .await
    }

    /// Patch the projects page settings. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateProjectsManagement,
    ) -> Result<ProjectsManagement, sqlx::Error> {
        let current = Self::get_or_create(pool).await?;
        let query = format!(
            "UPDATE projects_management SET \
                page_title = COALESCE($2, page_title), \
                page_subtitle = COALESCE($3, page_subtitle), \
                page_description = COALESCE($4, page_description), \
                filter_categories = COALESCE($5, filter_categories), \
                cta_title = COALESCE($6, cta_title), \
                cta_description = COALESCE($7, cta_description), \
                cta_button_text = COALESCE($8, cta_button_text) \
             WHERE id = $1 \
             RETURNING {PROJECTS_COLUMNS}"
        );
        sqlx::query_as::<_, ProjectsManagement>(&query)
            .bind(current.id)
            .bind(&input.page_title)
            .bind(&input.page_subtitle)
            .bind(&input.page_description)
            .bind(input.filter_categories.as_ref().map(Json))
            .bind(&input.cta_title)
            .bind(&input.cta_description)
            .bind(&input.cta_button_text)
            .fetch_one(pool)
            .await
    }
}
