//! Admin handlers for testimonials. At most three may be featured.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::content::{check_featured_cap, validate_rating};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::uploads::UploadKind;
use folio_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use folio_db::repositories::TestimonialRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::RequireEditor;
use crate::query::ReorderRequest;
use crate::response::{DataResponse, UploadResponse};
use crate::state::AppState;
use crate::storage::read_file_field;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

async fn ensure_testimonial_exists(pool: &PgPool, id: DbId) -> AppResult<Testimonial> {
    TestimonialRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

async fn ensure_featured_slot(pool: &PgPool, testimonial_id: Option<DbId>) -> AppResult<()> {
    let featured = TestimonialRepo::count_featured(pool, testimonial_id).await?;
    check_featured_cap(featured)?;
    Ok(())
}

/// GET /api/v1/admin/testimonials
pub async fn list(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// GET /api/v1/admin/testimonials/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let testimonial = ensure_testimonial_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: testimonial }))
}

/// POST /api/v1/admin/testimonials
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTestimonial>,
) -> AppResult<impl IntoResponse> {
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if input.is_featured.unwrap_or(false) {
        ensure_featured_slot(&state.pool, None).await?;
    }

    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;
    tracing::info!(testimonial_id = testimonial.id, user_id = user.user_id, "Testimonial created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PUT /api/v1/admin/testimonials/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTestimonial>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_testimonial_exists(&state.pool, id).await?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }
    if input.is_featured == Some(true) && !existing.is_featured {
        ensure_featured_slot(&state.pool, Some(id)).await?;
    }

    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(testimonial_id = id, user_id = user.user_id, "Testimonial updated");
    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /api/v1/admin/testimonials/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TestimonialRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    if let Some(path) = &deleted.image_path {
        state.disk.delete(path).await;
    }
    tracing::info!(testimonial_id = id, user_id = user.user_id, "Testimonial deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/testimonials/reorder
pub async fn reorder(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    if !TestimonialRepo::reorder(&state.pool, &input.ids).await? {
        return Err(AppError::BadRequest(
            "Reorder list contains unknown testimonial ids".into(),
        ));
    }
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /api/v1/admin/testimonials/{id}/toggle-featured
pub async fn toggle_featured(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_testimonial_exists(&state.pool, id).await?;
    if !existing.is_featured {
        ensure_featured_slot(&state.pool, Some(id)).await?;
    }

    let testimonial = TestimonialRepo::set_featured(&state.pool, id, !existing.is_featured)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(testimonial_id = id, is_featured = testimonial.is_featured, "Testimonial featured flag toggled");
    Ok(Json(DataResponse { data: testimonial }))
}

/// POST /api/v1/admin/testimonials/{id}/image
pub async fn upload_image(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_testimonial_exists(&state.pool, id).await?;
    let file = read_file_field(&mut multipart).await?;
    let path = state.disk.store(UploadKind::TestimonialImage, &file).await?;

    let testimonial = match TestimonialRepo::set_image_path(&state.pool, id, &path).await {
        Ok(Some(testimonial)) => testimonial,
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
        data: testimonial,
    }))
}
