//! Rules for the catalog entities: skills, testimonials, projects and
//! work experience.
//!
//! The public site shows a bounded number of skills per display bucket and a
//! bounded number of featured testimonials. Those caps are checked here and
//! enforced by the admin handlers before a row is made visible.

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Skill rendered as a labelled progress bar.
pub const SKILL_DISPLAY_PROGRESS: &str = "progress";

/// Skill rendered as an icon card.
pub const SKILL_DISPLAY_CARD: &str = "card";

/// Maximum number of visible `progress` skills.
pub const MAX_VISIBLE_PROGRESS_SKILLS: i64 = 5;

/// Maximum number of visible `card` skills.
pub const MAX_VISIBLE_CARD_SKILLS: i64 = 6;

const VALID_DISPLAY_TYPES: &[&str] = &[SKILL_DISPLAY_PROGRESS, SKILL_DISPLAY_CARD];

/// Validate that `display_type` is one of the known skill buckets.
pub fn validate_display_type(display_type: &str) -> Result<(), CoreError> {
    if VALID_DISPLAY_TYPES.contains(&display_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid display type '{display_type}'. Must be one of: {VALID_DISPLAY_TYPES:?}"
        )))
    }
}

/// Number of skills of the given bucket the public site shows.
pub fn visible_cap(display_type: &str) -> Result<i64, CoreError> {
    match display_type {
        SKILL_DISPLAY_PROGRESS => Ok(MAX_VISIBLE_PROGRESS_SKILLS),
        SKILL_DISPLAY_CARD => Ok(MAX_VISIBLE_CARD_SKILLS),
        other => Err(CoreError::Validation(format!(
            "Invalid display type '{other}'. Must be one of: {VALID_DISPLAY_TYPES:?}"
        ))),
    }
}

/// Check that one more skill can be made visible in `display_type`.
///
/// `currently_visible` must not include the skill being changed.
pub fn check_visibility_cap(display_type: &str, currently_visible: i64) -> Result<(), CoreError> {
    let cap = visible_cap(display_type)?;
    if currently_visible >= cap {
        return Err(CoreError::Validation(format!(
            "At most {cap} '{display_type}' skills can be visible. Hide another skill first."
        )));
    }
    Ok(())
}

/// Validate a proficiency percentage.
pub fn validate_proficiency(proficiency: i32) -> Result<(), CoreError> {
    if (0..=100).contains(&proficiency) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Proficiency must be between 0 and 100, got {proficiency}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// Maximum number of featured testimonials on the home page.
pub const MAX_FEATURED_TESTIMONIALS: i64 = 3;

/// Check that one more testimonial can be featured.
///
/// `currently_featured` must not include the testimonial being changed.
pub fn check_featured_cap(currently_featured: i64) -> Result<(), CoreError> {
    if currently_featured >= MAX_FEATURED_TESTIMONIALS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_FEATURED_TESTIMONIALS} testimonials can be featured. \
             Unfeature another testimonial first."
        )));
    }
    Ok(())
}

/// Validate a star rating.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between 1 and 5, got {rating}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub const PROJECT_STATUS_COMPLETED: &str = "completed";
pub const PROJECT_STATUS_IN_PROGRESS: &str = "in_progress";
pub const PROJECT_STATUS_PLANNED: &str = "planned";

const VALID_PROJECT_STATUSES: &[&str] = &[
    PROJECT_STATUS_COMPLETED,
    PROJECT_STATUS_IN_PROGRESS,
    PROJECT_STATUS_PLANNED,
];

/// Validate a project status string.
pub fn validate_project_status(status: &str) -> Result<(), CoreError> {
    if VALID_PROJECT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid project status '{status}'. Must be one of: {VALID_PROJECT_STATUSES:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

/// Validate an employment date range.
///
/// A current position has no end date; otherwise the end date, when given,
/// must not precede the start date.
pub fn validate_experience_dates(
    start: Date,
    end: Option<Date>,
    is_current: bool,
) -> Result<(), CoreError> {
    if is_current {
        return Ok(());
    }
    match end {
        Some(end) if end < start => Err(CoreError::Validation(format!(
            "End date {end} is before start date {start}"
        ))),
        _ => Ok(()),
    }
}

/// A current position never keeps an end date.
pub fn normalize_experience_end(end: Option<Date>, is_current: bool) -> Option<Date> {
    if is_current {
        None
    } else {
        end
    }
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Derive a URL slug from a title.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single `-`. Leading and trailing separators are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Validate a caller-supplied slug (lowercase alphanumerics and single dashes).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and single dashes"
        )))
    }
}

/// Slug for a new row: the caller's slug when given (validated), else one
/// derived from `title`.
pub fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, CoreError> {
    match explicit {
        Some(slug) => {
            validate_slug(slug)?;
            Ok(slug.to_string())
        }
        None => {
            let slug = slugify(title);
            if slug.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Cannot derive a slug from '{title}'. Provide one explicitly"
                )));
            }
            Ok(slug)
        }
    }
}

/// The `attempt`-th candidate for a derived slug: `base`, `base-2`, `base-3`, ...
pub fn suffixed_slug(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}
