//! Public read endpoints consumed by the portfolio front end, plus the
//! contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::blocks::FILTER_ALL;
use folio_core::content::{SKILL_DISPLAY_CARD, SKILL_DISPLAY_PROGRESS};
use folio_core::error::CoreError;
use folio_core::types::{DbId, Timestamp};
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::models::experience::Experience;
use folio_db::models::page_settings::{ProjectsManagement, ServicesManagement};
use folio_db::models::profile::Profile;
use folio_db::models::project::Project;
use folio_db::models::service::Service;
use folio_db::models::skill::Skill;
use folio_db::models::testimonial::Testimonial;
use folio_db::repositories::{
    ContactMessageRepo, ExperienceRepo, ProfileRepo, ProjectRepo, ProjectsManagementRepo,
    ServiceRepo, ServicesManagementRepo, SkillRepo, TestimonialRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson, ValidatedQuery};
use crate::query::CategoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything the home page renders, in one request.
#[derive(Debug, Serialize)]
pub struct HomePage {
    pub profile: Profile,
    pub featured_services: Vec<Service>,
    pub featured_projects: Vec<Project>,
    pub progress_skills: Vec<Skill>,
    pub card_skills: Vec<Skill>,
    pub testimonials: Vec<Testimonial>,
    pub experiences: Vec<Experience>,
    /// Prefix to join with stored file paths.
    pub storage_url: String,
}

#[derive(Debug, Serialize)]
pub struct ServicesPage {
    pub page: ServicesManagement,
    pub services: Vec<Service>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub page: ProjectsManagement,
    pub projects: Vec<Project>,
    /// The active filter, `all` when none.
    pub active_category: String,
}

/// Receipt returned to the contact form.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub id: DbId,
    pub received_at: Timestamp,
}

/// GET /api/v1/site
pub async fn home(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let page = HomePage {
        profile: ProfileRepo::get_or_create(pool).await?,
        featured_services: ServiceRepo::list_featured(pool).await?,
        featured_projects: ProjectRepo::list_featured(pool).await?,
        progress_skills: SkillRepo::list_visible(pool, SKILL_DISPLAY_PROGRESS).await?,
        card_skills: SkillRepo::list_visible(pool, SKILL_DISPLAY_CARD).await?,
        testimonials: TestimonialRepo::list_featured(pool).await?,
        experiences: ExperienceRepo::list(pool).await?,
        storage_url: state.config.storage.public_url_prefix.clone(),
    };
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/profile
pub async fn profile(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let profile = ProfileRepo::get_or_create(&state.pool).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/services
pub async fn services(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let page = ServicesPage {
        page: ServicesManagementRepo::get_or_create(&state.pool).await?,
        services: ServiceRepo::list(&state.pool, false).await?,
    };
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/services/{slug}
pub async fn service_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let service = ServiceRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Service",
                key: slug.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: service }))
}

/// GET /api/v1/projects?category=
pub async fn projects(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<CategoryParams>,
) -> AppResult<impl IntoResponse> {
    let category = params
        .category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(FILTER_ALL));

    let page = ProjectsPage {
        page: ProjectsManagementRepo::get_or_create(&state.pool).await?,
        projects: ProjectRepo::list_published(&state.pool, category.as_deref()).await?,
        active_category: category.unwrap_or_else(|| FILTER_ALL.to_string()),
    };
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/projects/{slug}
pub async fn project_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Project",
                key: slug.clone(),
            })
        })?;
    Ok(Json(DataResponse { data: project }))
}

/// POST /api/v1/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::create(&state.pool, &input).await?;
    tracing::info!(message_id = message.id, "Contact message received");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ContactReceipt {
                id: message.id,
                received_at: message.created_at,
            },
        }),
    ))
}
