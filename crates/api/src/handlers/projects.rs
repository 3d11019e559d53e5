//! Admin handlers for the portfolio projects and the projects page copy.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::blocks::validate_filter_categories;
use folio_core::content::{
    resolve_slug, suffixed_slug, validate_project_status, validate_slug, PROJECT_STATUS_COMPLETED,
};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::uploads::UploadKind;
use folio_db::models::page_settings::UpdateProjectsManagement;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::repositories::{ProjectRepo, ProjectsManagementRepo};
use sqlx::PgPool;

use super::MAX_SLUG_ATTEMPTS;
use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::RequireEditor;
use crate::query::ReorderRequest;
use crate::response::{DataResponse, UploadResponse};
use crate::state::AppState;
use crate::storage::read_file_field;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

async fn ensure_project_exists(pool: &PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Reject an explicit slug another project already uses.
async fn ensure_slug_free(pool: &PgPool, slug: &str, own_id: Option<DbId>) -> AppResult<()> {
    if ProjectRepo::slug_exists(pool, slug, own_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Slug '{slug}' is already in use"
        ))));
    }
    Ok(())
}

async fn unique_slug(pool: &PgPool, base: &str) -> AppResult<String> {
    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let candidate = suffixed_slug(base, attempt);
        if !ProjectRepo::slug_exists(pool, &candidate, None).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::Core(CoreError::Conflict(format!(
        "No free slug for '{base}'. Provide one explicitly"
    ))))
}

// ---------------------------------------------------------------------------
// Catalog CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects
pub async fn list(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/admin/projects/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ensure_project_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<impl IntoResponse> {
    let status = input.status.as_deref().unwrap_or(PROJECT_STATUS_COMPLETED);
    validate_project_status(status)?;

    let slug = match input.slug.as_deref() {
        Some(explicit) => {
            let slug = resolve_slug(Some(explicit), &input.title)?;
            ensure_slug_free(&state.pool, &slug, None).await?;
            slug
        }
        None => unique_slug(&state.pool, &resolve_slug(None, &input.title)?).await?,
    };

    let project = ProjectRepo::create(&state.pool, &input, &slug, status).await?;
    tracing::info!(project_id = project.id, slug = %project.slug, user_id = user.user_id, "Project created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
        ensure_slug_free(&state.pool, slug, Some(id)).await?;
    }
    if let Some(status) = &input.status {
        validate_project_status(status)?;
    }
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, user_id = user.user_id, "Project updated");
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(path) = &deleted.image_path {
        state.disk.delete(path).await;
    }
    tracing::info!(project_id = id, user_id = user.user_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/projects/reorder
pub async fn reorder(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    if !ProjectRepo::reorder(&state.pool, &input.ids).await? {
        return Err(AppError::BadRequest(
            "Reorder list contains unknown project ids".into(),
        ));
    }
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects/{id}/toggle-featured
pub async fn toggle_featured(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, is_featured = project.is_featured, "Project featured flag toggled");
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects/{id}/toggle-published
pub async fn toggle_published(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::toggle_published(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = id, is_published = project.is_published, "Project published flag toggled");
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/admin/projects/{id}/image
pub async fn upload_image(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_project_exists(&state.pool, id).await?;
    let file = read_file_field(&mut multipart).await?;
    let path = state.disk.store(UploadKind::ProjectImage, &file).await?;

    let project = match ProjectRepo::set_image_path(&state.pool, id, &path).await {
        Ok(Some(project)) => project,
        Ok(None) => {
            state.disk.delete(&path).await;
            return Err(not_found(id));
        }
        Err(e) => {
            state.disk.delete(&path).await;
            return Err(e.into());
        }
    };
    state
        .disk
        .delete_replaced(existing.image_path.as_deref(), &path)
        .await;

    Ok(Json(UploadResponse {
        url: state.disk.url(&path),
        data: project,
    }))
}

// ---------------------------------------------------------------------------
// Projects page copy
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/projects-page
pub async fn get_page(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let page = ProjectsManagementRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/projects-page
pub async fn update_page(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateProjectsManagement>,
) -> AppResult<impl IntoResponse> {
    if let Some(categories) = &input.filter_categories {
        validate_filter_categories(categories)?;
    }
    let page = ProjectsManagementRepo::update(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, "Projects page updated");
    Ok(Json(DataResponse { data: page }))
}
