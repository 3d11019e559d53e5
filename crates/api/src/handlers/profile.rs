//! Handlers for the admin `/profile` resource and its uploads.

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use folio_core::blocks::validate_nav_items;
use folio_core::uploads::UploadKind;
use folio_db::models::profile::UpdateProfile;
use folio_db::repositories::profile_repo::ProfileFile;
use folio_db::repositories::ProfileRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireEditor;
use crate::response::{DataResponse, UploadResponse};
use crate::state::AppState;
use crate::storage::read_file_field;

/// GET /api/v1/admin/profile
pub async fn get(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/admin/profile
pub async fn update(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    if let Some(items) = &input.navbar_items {
        validate_nav_items(items)?;
    }
    let profile = ProfileRepo::update(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, "Profile updated");
    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/admin/profile/avatar
pub async fn upload_avatar(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    replace_file(&state, ProfileFile::Avatar, UploadKind::Avatar, multipart).await
}

/// POST /api/v1/admin/profile/resume
pub async fn upload_resume(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    replace_file(&state, ProfileFile::Resume, UploadKind::Resume, multipart).await
}

/// POST /api/v1/admin/profile/logo
pub async fn upload_logo(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    replace_file(&state, ProfileFile::Logo, UploadKind::Logo, multipart).await
}

/// Store the uploaded file, point the profile at it, then drop the old file.
async fn replace_file(
    state: &AppState,
    target: ProfileFile,
    kind: UploadKind,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let file = read_file_field(&mut multipart).await?;
    let path = state.disk.store(kind, &file).await?;

    let (profile, previous) = match ProfileRepo::set_file_path(&state.pool, target, &path).await {
        Ok(result) => result,
        Err(e) => {
            state.disk.delete(&path).await;
            return Err(e.into());
        }
    };
    state.disk.delete_replaced(previous.as_deref(), &path).await;

    tracing::info!(file = ?target, path = %path, "Profile file replaced");
    Ok(Json(UploadResponse {
        url: state.disk.url(&path),
        data: profile,
    }))
}
