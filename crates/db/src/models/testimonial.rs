//! Testimonial entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub client_name: String,
    pub client_position: Option<String>,
    pub client_company: Option<String>,
    pub content: String,
    pub rating: i32,
    pub image_path: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 255))]
    pub client_name: String,
    #[validate(length(max = 255))]
    pub client_position: Option<String>,
    #[validate(length(max = 255))]
    pub client_company: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing testimonial. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 255))]
    pub client_name: Option<String>,
    #[validate(length(max = 255))]
    pub client_position: Option<String>,
    #[validate(length(max = 255))]
    pub client_company: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
}
