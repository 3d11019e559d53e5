//! Skill entity model and DTOs.
//!
//! `display_type` picks the bucket a skill renders in on the public site
//! (`progress` bar or `card`); each bucket has its own visibility cap.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub proficiency: i32,
    pub category: String,
    pub icon: Option<String>,
    pub display_type: String,
    pub is_visible: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new skill.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 100))]
    pub proficiency: i32,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    pub display_type: Option<String>,
    pub is_visible: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing skill. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub proficiency: Option<i32>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    pub display_type: Option<String>,
    pub is_visible: Option<bool>,
    pub sort_order: Option<i32>,
}
