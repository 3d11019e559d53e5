//! Handler for the admin dashboard summary.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use folio_db::repositories::{
    ContactMessageRepo, ExperienceRepo, ProjectRepo, ServiceRepo, SkillRepo, TestimonialRepo,
};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Row counts shown on the dashboard cards.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub services: i64,
    pub projects: i64,
    pub skills: i64,
    pub testimonials: i64,
    pub experiences: i64,
    pub unread_messages: i64,
}

/// GET /api/v1/admin/dashboard
pub async fn stats(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let stats = DashboardStats {
        services: ServiceRepo::count(pool).await?,
        projects: ProjectRepo::count(pool).await?,
        skills: SkillRepo::count(pool).await?,
        testimonials: TestimonialRepo::count(pool).await?,
        experiences: ExperienceRepo::count(pool).await?,
        unread_messages: ContactMessageRepo::count_unread(pool).await?,
    };
    Ok(Json(DataResponse { data: stats }))
}
