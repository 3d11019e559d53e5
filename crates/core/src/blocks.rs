//! Flexible content blocks persisted as JSONB arrays.
//!
//! Navbar items, social links, work-process steps and project filter
//! categories are edited as whole lists from the admin panel. Each item type
//! derives [`Validate`] for field-level checks; the `validate_*` functions
//! below cover list-level rules (counts, uniqueness).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Maximum number of navbar entries.
pub const MAX_NAV_ITEMS: usize = 10;

/// Maximum number of work-process steps on the services page.
pub const MAX_PROCESS_STEPS: usize = 12;

/// Maximum number of project filter categories.
pub const MAX_FILTER_CATEGORIES: usize = 20;

/// Filter value that matches every project; always implied, never stored.
pub const FILTER_ALL: &str = "all";

/// One entry in the site navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NavItem {
    #[validate(length(min = 1, max = 50))]
    pub label: String,
    /// Anchor (`#services`) or path (`/projects`).
    #[validate(length(min = 1, max = 255))]
    pub href: String,
}

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SocialLink {
    #[validate(length(min = 1, max = 50))]
    pub platform: String,
    #[validate(url)]
    pub url: String,
}

/// One step of the "how I work" process on the services page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProcessStep {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 500))]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A category button in the projects filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FilterCategory {
    #[validate(length(min = 1, max = 50))]
    pub label: String,
    /// Matched against `projects.category`.
    #[validate(length(min = 1, max = 50))]
    pub value: String,
}

/// Validate navbar items: count limit and no empty `href`.
pub fn validate_nav_items(items: &[NavItem]) -> Result<(), CoreError> {
    if items.len() > MAX_NAV_ITEMS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_NAV_ITEMS} navbar items are allowed, got {}",
            items.len()
        )));
    }
    if let Some(bad) = items.iter().find(|i| i.href.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "Navbar item '{}' has an empty link",
            bad.label
        )));
    }
    Ok(())
}

/// Validate work-process steps: count limit and no blank titles.
pub fn validate_process_steps(steps: &[ProcessStep]) -> Result<(), CoreError> {
    if steps.len() > MAX_PROCESS_STEPS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_PROCESS_STEPS} process steps are allowed, got {}",
            steps.len()
        )));
    }
    if steps.iter().any(|s| s.title.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Process step titles must not be blank".into(),
        ));
    }
    Ok(())
}

/// Validate filter categories: count limit, unique values, and no explicit
/// `all` entry (the front end always renders it first).
pub fn validate_filter_categories(categories: &[FilterCategory]) -> Result<(), CoreError> {
    if categories.len() > MAX_FILTER_CATEGORIES {
        return Err(CoreError::Validation(format!(
            "At most {MAX_FILTER_CATEGORIES} filter categories are allowed, got {}",
            categories.len()
        )));
    }

    let mut seen = HashSet::new();
    for category in categories {
        let value = category.value.trim().to_lowercase();
        if value == FILTER_ALL {
            return Err(CoreError::Validation(format!(
                "Filter value '{FILTER_ALL}' is reserved"
            )));
        }
        if !seen.insert(value) {
            return Err(CoreError::Validation(format!(
                "Duplicate filter category value '{}'",
                category.value
            )));
        }
    }
    Ok(())
}
