//! Work experience entity model and DTOs.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub is_current: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new experience entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExperience {
    #[validate(length(min = 1, max = 255))]
    pub company: String,
    #[validate(length(min = 1, max = 255))]
    pub position: String,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 50))]
    pub employment_type: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Option<Date>,
    #[serde(default)]
    pub is_current: bool,
    pub sort_order: Option<i32>,
}

/// DTO for updating an experience entry.
///
/// Dates are checked against the stored row after merging, so a partial
/// update cannot produce an inverted range.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateExperience {
    #[validate(length(min = 1, max = 255))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub position: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 50))]
    pub employment_type: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub is_current: Option<bool>,
    pub sort_order: Option<i32>,
}
