//! Portfolio project entity model and DTOs.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub technologies: Json<Vec<String>>,
    pub image_path: Option<String>,
    pub demo_url: Option<String>,
    pub repository_url: Option<String>,
    pub client_name: Option<String>,
    pub completion_date: Option<Date>,
    pub sort_order: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    #[validate(length(max = 20000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    pub status: Option<String>,
    #[validate(length(max = 30))]
    pub technologies: Option<Vec<String>>,
    #[validate(url)]
    pub demo_url: Option<String>,
    #[validate(url)]
    pub repository_url: Option<String>,
    #[validate(length(max = 255))]
    pub client_name: Option<String>,
    pub completion_date: Option<Date>,
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

/// DTO for updating an existing project. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 500))]
    pub summary: Option<String>,
    #[validate(length(max = 20000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    pub status: Option<String>,
    #[validate(length(max = 30))]
    pub technologies: Option<Vec<String>>,
    #[validate(url)]
    pub demo_url: Option<String>,
    #[validate(url)]
    pub repository_url: Option<String>,
    #[validate(length(max = 255))]
    pub client_name: Option<String>,
    pub completion_date: Option<Date>,
    pub sort_order: Option<i32>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}
