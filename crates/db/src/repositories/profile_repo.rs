//! Repository for the `profiles` singleton table.

use folio_core::defaults;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, headline, bio, email, phone, location, \
    hero_title, hero_subtitle, hero_description, \
    cta_primary_text, cta_primary_link, cta_secondary_text, cta_secondary_link, \
    avatar_path, resume_path, logo_path, logo_text, navbar_items, social_links, \
    years_experience, projects_completed, happy_clients, created_at, updated_at";

/// Which uploaded file on the profile a path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFile {
    Avatar,
    Resume,
    Logo,
}

impl ProfileFile {
    fn column(self) -> &'static str {
        match self {
            Self::Avatar => "avatar_path",
            Self::Resume => "resume_path",
            Self::Logo => "logo_path",
        }
    }
}

/// Provides get-or-create and update operations for the site profile.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Return the most recently updated profile, inserting the defaults if
    /// the table is empty.
    pub async fn get_or_create(pool: &PgPool) -> Result<Profile, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM profiles ORDER BY updated_at DESC, id DESC LIMIT 1");
        if let Some(profile) = sqlx::query_as::<_, Profile>(&query)
            .fetch_optional(pool)
            .await?
        {
            return Ok(profile);
        }

        tracing::info!("No profile row found, creating defaults");
        Self::create_default(pool).await
    }

    async fn create_default(pool: &PgPool) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                (name, headline, bio, email, hero_title, hero_subtitle, hero_description, \
                 cta_primary_text, cta_primary_link, cta_secondary_text, cta_secondary_link, \
                 logo_text, navbar_items) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(defaults::PROFILE_NAME)
            .bind(defaults::PROFILE_HEADLINE)
            .bind(defaults::PROFILE_BIO)
            .bind(defaults::PROFILE_EMAIL)
            .bind(defaults::PROFILE_HERO_TITLE)
            .bind(defaults::PROFILE_HERO_SUBTITLE)
            .bind(defaults::PROFILE_HERO_DESCRIPTION)
            .bind(defaults::PROFILE_CTA_PRIMARY_TEXT)
            .bind(defaults::PROFILE_CTA_PRIMARY_LINK)
            .bind(defaults::PROFILE_CTA_SECONDARY_TEXT)
            .bind(defaults::PROFILE_CTA_SECONDARY_LINK)
            .bind(defaults::PROFILE_LOGO_TEXT)
            .bind(Json(defaults::nav_items()))
            .fetch_one(pool)
            .await
    }

    /// Update the profile. Only non-`None` fields are applied.
    pub async fn update(pool: &PgPool, input: &UpdateProfile) -> Result<Profile, sqlx::Error> {
        let current = Self::get_or_create(pool).await?;
        let query = format!(
            "UPDATE profiles SET \
                name = COALESCE($2, name), \
                headline = COALESCE($3, headline), \
                bio = COALESCE($4, bio), \
                email = COALESCE($5, email), \
                phone = COALESCE($6, phone), \
                location = COALESCE($7, location), \
                hero_title = COALESCE($8, hero_title), \
                hero_subtitle = COALESCE($9, hero_subtitle), \
                hero_description = COALESCE($10, hero_description), \
                cta_primary_text = COALESCE($11, cta_primary_text), \
                cta_primary_link = COALESCE($12, cta_primary_link), \
                cta_secondary_text = COALESCE($13, cta_secondary_text), \
                cta_secondary_link = COALESCE($14, cta_secondary_link), \
                logo_text = COALESCE($15, logo_text), \
                navbar_items = COALESCE($16, navbar_items), \
                social_links = COALESCE($17, social_links), \
                years_experience = COALESCE($18, years_experience), \
                projects_completed = COALESCE($19, projects_completed), \
                happy_clients = COALESCE($20, happy_clients) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(current.id)
            .bind(&input.name)
            .bind(&input.headline)
            .bind(&input.bio)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.hero_title)
            .bind(&input.hero_subtitle)
            .bind(&input.hero_description)
            .bind(&input.cta_primary_text)
            .bind(&input.cta_primary_link)
            .bind(&input.cta_secondary_text)
            .bind(&input.cta_secondary_link)
            .bind(&input.logo_text)
            .bind(input.navbar_items.as_ref().map(Json))
            .bind(input.social_links.as_ref().map(Json))
            .bind(input.years_experience)
            .bind(input.projects_completed)
            .bind(input.happy_clients)
            .fetch_one(pool)
            .await
    }

    /// Point one of the profile's file columns at a newly stored file.
    ///
    /// Returns the updated profile and the previous path so the caller can
    /// remove the replaced file from disk.
    pub async fn set_file_path(
        pool: &PgPool,
        file: ProfileFile,
        path: &str,
    ) -> Result<(Profile, Option<String>), sqlx::Error> {
        let current = Self::get_or_create(pool).await?;
        let previous = match file {
            ProfileFile::Avatar => current.avatar_path.clone(),
            ProfileFile::Resume => current.resume_path.clone(),
            ProfileFile::Logo => current.logo_path.clone(),
        };

        let query = format!(
            "UPDATE profiles SET {} = $2 WHERE id = $1 RETURNING {COLUMNS}",
            file.column()
        );
        let profile = sqlx::query_as::<_, Profile>(&query)
            .bind(current.id)
            .bind(path)
            .fetch_one(pool)
            .await?;
        Ok((profile, previous))
    }
}
