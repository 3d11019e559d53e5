//! Service catalog entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: String,
    pub icon: Option<String>,
    pub image_path: Option<String>,
    pub starting_price: Option<f64>,
    pub price_unit: Option<String>,
    pub features: Json<Vec<String>>,
    pub technologies: Json<Vec<String>>,
    pub delivery_time: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service. The slug is derived from the title when
/// omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 500))]
    pub short_description: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[validate(range(min = 0.0))]
    pub starting_price: Option<f64>,
    #[validate(length(max = 50))]
    pub price_unit: Option<String>,
    #[validate(length(max = 30))]
    pub features: Option<Vec<String>>,
    #[validate(length(max = 30))]
    pub technologies: Option<Vec<String>>,
    #[validate(length(max = 100))]
    pub delivery_time: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// DTO for updating an existing service. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateService {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub slug: Option<String>,
    #[validate(length(max = 500))]
    pub short_description: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub icon: Option<String>,
    #[validate(range(min = 0.0))]
    pub starting_price: Option<f64>,
    #[validate(length(max = 50))]
    pub price_unit: Option<String>,
    #[validate(length(max = 30))]
    pub features: Option<Vec<String>>,
    #[validate(length(max = 30))]
    pub technologies: Option<Vec<String>>,
    #[validate(length(max = 100))]
    pub delivery_time: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}
