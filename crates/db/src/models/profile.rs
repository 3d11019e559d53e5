//! Profile entity model and DTOs.
//!
//! The profile is a singleton: identity, hero copy, call-to-action text,
//! logo and navbar configuration for the whole site.

use folio_core::blocks::{NavItem, SocialLink};
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,
    pub cta_primary_text: String,
    pub cta_primary_link: String,
    pub cta_secondary_text: String,
    pub cta_secondary_link: String,
    pub avatar_path: Option<String>,
    pub resume_path: Option<String>,
    pub logo_path: Option<String>,
    pub logo_text: String,
    pub navbar_items: Json<Vec<NavItem>>,
    pub social_links: Json<Vec<SocialLink>>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the profile. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub headline: Option<String>,
    #[validate(length(max = 5000))]
    pub bio: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub hero_title: Option<String>,
    #[validate(length(max = 255))]
    pub hero_subtitle: Option<String>,
    #[validate(length(max = 2000))]
    pub hero_description: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub cta_primary_text: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub cta_primary_link: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub cta_secondary_text: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub cta_secondary_link: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub logo_text: Option<String>,
    #[validate(nested)]
    pub navbar_items: Option<Vec<NavItem>>,
    #[validate(nested)]
    pub social_links: Option<Vec<SocialLink>>,
    #[validate(range(min = 0, max = 100))]
    pub years_experience: Option<i32>,
    #[validate(range(min = 0))]
    pub projects_completed: Option<i32>,
    #[validate(range(min = 0))]
    pub happy_clients: Option<i32>,
}
