//! Admin handlers for the services catalog and the services page copy.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::blocks::validate_process_steps;
use folio_core::content::{resolve_slug, suffixed_slug, validate_slug};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::uploads::UploadKind;
use folio_db::models::page_settings::UpdateServicesManagement;
use folio_db::models::service::{CreateService, Service, UpdateService};
use folio_db::repositories::{ServiceRepo, ServicesManagementRepo};
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
        entity: "Service",
        id,
    })
}

async fn ensure_service_exists(pool: &PgPool, id: DbId) -> AppResult<Service> {
    ServiceRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Reject an explicit slug another service already uses.
async fn ensure_slug_free(pool: &PgPool, slug: &str, own_id: Option<DbId>) -> AppResult<()> {
    if ServiceRepo::slug_exists(pool, slug, own_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Slug '{slug}' is already in use"
        ))));
    }
    Ok(())
}

/// First free slug derived from the title.
async fn unique_slug(pool: &PgPool, base: &str) -> AppResult<String> {
    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let candidate = suffixed_slug(base, attempt);
        if !ServiceRepo::slug_exists(pool, &candidate, None).await? {
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

/// GET /api/v1/admin/services
pub async fn list(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let services = ServiceRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: services }))
}

/// GET /api/v1/admin/services/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ensure_service_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/services
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateService>,
) -> AppResult<impl IntoResponse> {
    let slug = match input.slug.as_deref() {
        Some(explicit) => {
            let slug = resolve_slug(Some(explicit), &input.title)?;
            ensure_slug_free(&state.pool, &slug, None).await?;
            slug
        }
        None => unique_slug(&state.pool, &resolve_slug(None, &input.title)?).await?,
    };

    let service = ServiceRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(service_id = service.id, slug = %service.slug, user_id = user.user_id, "Service created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PUT /api/v1/admin/services/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateService>,
) -> AppResult<impl IntoResponse> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
        ensure_slug_free(&state.pool, slug, Some(id)).await?;
    }
    let service = ServiceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(service_id = id, user_id = user.user_id, "Service updated");
    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/admin/services/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ServiceRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(path) = &deleted.image_path {
        state.disk.delete(path).await;
    }
    tracing::info!(service_id = id, user_id = user.user_id, "Service deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/services/reorder
pub async fn reorder(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    if !ServiceRepo::reorder(&state.pool, &input.ids).await? {
        return Err(AppError::BadRequest(
            "Reorder list contains unknown service ids".into(),
        ));
    }
    let services = ServiceRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/admin/services/{id}/toggle-active
pub async fn toggle_active(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::toggle_active(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(service_id = id, is_active = service.is_active, "Service active flag toggled");
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/services/{id}/toggle-featured
pub async fn toggle_featured(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::toggle_featured(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(service_id = id, is_featured = service.is_featured, "Service featured flag toggled");
    Ok(Json(DataResponse { data: service }))
}

/// POST /api/v1/admin/services/{id}/image
pub async fn upload_image(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_service_exists(&state.pool, id).await?;
    let file = read_file_field(&mut multipart).await?;
    let path = state.disk.store(UploadKind::ServiceImage, &file).await?;

    let service = match ServiceRepo::set_image_path(&state.pool, id, &path).await {
        Ok(Some(service)) => service,
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
        data: service,
    }))
}

// ---------------------------------------------------------------------------
// Services page copy
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/services-page
pub async fn get_page(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let page = ServicesManagementRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /api/v1/admin/services-page
pub async fn update_page(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateServicesManagement>,
) -> AppResult<impl IntoResponse> {
    if let Some(steps) = &input.work_process_steps {
        validate_process_steps(steps)?;
    }
    let page = ServicesManagementRepo::update(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, "Services page updated");
    Ok(Json(DataResponse { data: page }))
}
