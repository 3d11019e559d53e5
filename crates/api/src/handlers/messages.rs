//! Admin inbox for contact form messages. Admin role only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use folio_core::types::DbId;
use folio_db::repositories::ContactMessageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedQuery};
use crate::middleware::rbac::RequireAdmin;
use crate::query::MessageListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ContactMessage",
        id,
    })
}

/// GET /api/v1/admin/messages
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<MessageListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);
    let offset = clamp_offset(params.offset);
    let messages =
        ContactMessageRepo::list(&state.pool, params.unread_only, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/admin/messages/{id}
///
/// Opening a message marks it read.
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: message }))
}

/// POST /api/v1/admin/messages/{id}/read
pub async fn mark_read(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: message }))
}

/// POST /api/v1/admin/messages/{id}/unread
pub async fn mark_unread(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::mark_unread(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/v1/admin/messages/{id}
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<StatusCode> {
    if !ContactMessageRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(message_id = id, user_id = admin.user_id, "Contact message deleted");
    Ok(StatusCode::NO_CONTENT)
}
