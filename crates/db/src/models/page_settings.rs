//! Services-page and projects-page settings (singleton rows).
//!
//! Both tables hold the copy for a public listing page plus one JSONB block:
//! work-process steps for services, filter categories for projects.

use folio_core::blocks::{FilterCategory, ProcessStep};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `services_management` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServicesManagement {
    pub id: DbId,
    pub page_title: String,
    pub page_subtitle: String,
    pub page_description: String,
    pub process_title: String,
    pub process_subtitle: String,
    pub work_process_steps: Json<Vec<ProcessStep>>,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the services page settings.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateServicesManagement {
    #[validate(length(min = 1, max = 255))]
    pub page_title: Option<String>,
    #[validate(length(max = 255))]
    pub page_subtitle: Option<String>,
    #[validate(length(max = 2000))]
    pub page_description: Option<String>,
    #[validate(length(max = 255))]
    pub process_title: Option<String>,
    #[validate(length(max = 255))]
    pub process_subtitle: Option<String>,
    #[validate(nested)]
    pub work_process_steps: Option<Vec<ProcessStep>>,
    #[validate(length(max = 255))]
    pub cta_title: Option<String>,
    #[validate(length(max = 1000))]
    pub cta_description: Option<String>,
    #[validate(length(max = 100))]
    pub cta_button_text: Option<String>,
}

/// A row from the `projects_management` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectsManagement {
    pub id: DbId,
    pub page_title: String,
    pub page_subtitle: String,
    pub page_description: String,
    pub filter_categories: Json<Vec<FilterCategory>>,
    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the projects page settings.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProjectsManagement {
    #[validate(length(min = 1, max = 255))]
    pub page_title: Option<String>,
    #[validate(length(max = 255))]
    pub page_subtitle: Option<String>,
    #[validate(length(max = 2000))]
    pub page_description: Option<String>,
    #[validate(nested)]
    pub filter_categories: Option<Vec<FilterCategory>>,
    #[validate(length(max = 255))]
    pub cta_title: Option<String>,
    #[validate(length(max = 1000))]
    pub cta_description: Option<String>,
    #[validate(length(max = 100))]
    pub cta_button_text: Option<String>,
}
