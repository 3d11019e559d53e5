//! Admin handlers for the work experience timeline.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::content::{normalize_experience_end, validate_experience_dates};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::experience::{CreateExperience, Experience, UpdateExperience};
use folio_db::repositories::ExperienceRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::RequireEditor;
use crate::query::ReorderRequest;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Experience",
        id,
    })
}

async fn ensure_experience_exists(pool: &PgPool, id: DbId) -> AppResult<Experience> {
    ExperienceRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/admin/experiences
pub async fn list(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let experiences = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: experiences }))
}

/// GET /api/v1/admin/experiences/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let experience = ensure_experience_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: experience }))
}

/// POST /api/v1/admin/experiences
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<CreateExperience>,
) -> AppResult<impl IntoResponse> {
    validate_experience_dates(input.start_date, input.end_date, input.is_current)?;
    input.end_date = normalize_experience_end(input.end_date, input.is_current);

    let experience = ExperienceRepo::create(&state.pool, &input).await?;
    tracing::info!(experience_id = experience.id, user_id = user.user_id, "Experience created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: experience })))
}

/// PUT /api/v1/admin/experiences/{id}
///
/// The date range is checked after merging the patch with the stored row.
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateExperience>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_experience_exists(&state.pool, id).await?;

    let start = input.start_date.unwrap_or(existing.start_date);
    let end = input.end_date.or(existing.end_date);
    let is_current = input.is_current.unwrap_or(existing.is_current);
    validate_experience_dates(start, end, is_current)?;

    let experience = ExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(experience_id = id, user_id = user.user_id, "Experience updated");
    Ok(Json(DataResponse { data: experience }))
}

/// DELETE /api/v1/admin/experiences/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !ExperienceRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(experience_id = id, user_id = user.user_id, "Experience deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/experiences/reorder
pub async fn reorder(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    if !ExperienceRepo::reorder(&state.pool, &input.ids).await? {
        return Err(AppError::BadRequest(
            "Reorder list contains unknown experience ids".into(),
        ));
    }
    let experiences = ExperienceRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: experiences }))
}
