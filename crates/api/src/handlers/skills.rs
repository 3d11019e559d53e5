//! Admin handlers for skills.
//!
//! The public site shows a bounded number of visible skills per display
//! bucket; every path that can make a skill visible checks that cap first.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::content::{
    check_visibility_cap, validate_display_type, validate_proficiency, SKILL_DISPLAY_PROGRESS,
};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::skill::{CreateSkill, Skill, UpdateSkill};
use folio_db::repositories::SkillRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::rbac::RequireEditor;
use crate::query::ReorderRequest;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Skill", id })
}

async fn ensure_skill_exists(pool: &PgPool, id: DbId) -> AppResult<Skill> {
    SkillRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Fail if showing one more skill in `display_type` would exceed its cap.
/// `skill_id` is left out of the count when the skill already exists.
async fn ensure_visible_slot(
    pool: &PgPool,
    display_type: &str,
    skill_id: Option<DbId>,
) -> AppResult<()> {
    let visible = SkillRepo::count_visible(pool, display_type, skill_id).await?;
    check_visibility_cap(display_type, visible)?;
    Ok(())
}

/// GET /api/v1/admin/skills
pub async fn list(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// GET /api/v1/admin/skills/{id}
pub async fn get_by_id(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let skill = ensure_skill_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: skill }))
}

/// POST /api/v1/admin/skills
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateSkill>,
) -> AppResult<impl IntoResponse> {
    let display_type = input
        .display_type
        .as_deref()
        .unwrap_or(SKILL_DISPLAY_PROGRESS);
    validate_display_type(display_type)?;
    validate_proficiency(input.proficiency)?;

    if input.is_visible.unwrap_or(true) {
        ensure_visible_slot(&state.pool, display_type, None).await?;
    }

    let skill = SkillRepo::create(&state.pool, &input, display_type).await?;
    tracing::info!(skill_id = skill.id, display_type, user_id = user.user_id, "Skill created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// PUT /api/v1/admin/skills/{id}
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSkill>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_skill_exists(&state.pool, id).await?;

    let display_type = input
        .display_type
        .as_deref()
        .unwrap_or(&existing.display_type);
    validate_display_type(display_type)?;
    if let Some(proficiency) = input.proficiency {
        validate_proficiency(proficiency)?;
    }

    let visible = input.is_visible.unwrap_or(existing.is_visible);
    let entering_bucket = !existing.is_visible || existing.display_type != display_type;
    if visible && entering_bucket {
        ensure_visible_slot(&state.pool, display_type, Some(id)).await?;
    }

    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(skill_id = id, user_id = user.user_id, "Skill updated");
    Ok(Json(DataResponse { data: skill }))
}

/// DELETE /api/v1/admin/skills/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !SkillRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(skill_id = id, user_id = user.user_id, "Skill deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/admin/skills/reorder
pub async fn reorder(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ReorderRequest>,
) -> AppResult<impl IntoResponse> {
    if !SkillRepo::reorder(&state.pool, &input.ids).await? {
        return Err(AppError::BadRequest(
            "Reorder list contains unknown skill ids".into(),
        ));
    }
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST /api/v1/admin/skills/{id}/toggle-visibility
pub async fn toggle_visibility(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_skill_exists(&state.pool, id).await?;
    if !existing.is_visible {
        ensure_visible_slot(&state.pool, &existing.display_type, Some(id)).await?;
    }

    let skill = SkillRepo::set_visible(&state.pool, id, !existing.is_visible)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(skill_id = id, is_visible = skill.is_visible, "Skill visibility toggled");
    Ok(Json(DataResponse { data: skill }))
}
