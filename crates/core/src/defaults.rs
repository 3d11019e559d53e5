//! Seed content for the singleton configuration rows.
//!
//! When the profile, services page or projects page row does not exist yet,
//! the repositories insert these values so the public site always has
//! something to render.

use crate::blocks::{FilterCategory, NavItem, ProcessStep};

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

pub const PROFILE_NAME: &str = "Your Name";
pub const PROFILE_HEADLINE: &str = "Full-Stack Developer";
pub const PROFILE_BIO: &str =
    "I build fast, accessible web applications and help businesses ship products people enjoy.";
pub const PROFILE_EMAIL: &str = "hello@example.com";
pub const PROFILE_HERO_TITLE: &str = "Hi, I'm a developer";
pub const PROFILE_HERO_SUBTITLE: &str = "Turning ideas into reliable software";
pub const PROFILE_HERO_DESCRIPTION: &str =
    "From first sketch to production launch, I design and build digital products end to end.";
pub const PROFILE_CTA_PRIMARY_TEXT: &str = "View My Work";
pub const PROFILE_CTA_PRIMARY_LINK: &str = "#projects";
pub const PROFILE_CTA_SECONDARY_TEXT: &str = "Contact Me";
pub const PROFILE_CTA_SECONDARY_LINK: &str = "#contact";
pub const PROFILE_LOGO_TEXT: &str = "Portfolio";

/// Default navbar entries, in display order.
pub fn nav_items() -> Vec<NavItem> {
    [
        ("Home", "#home"),
        ("About", "#about"),
        ("Services", "#services"),
        ("Projects", "#projects"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavItem {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Services page
// ---------------------------------------------------------------------------

pub const SERVICES_PAGE_TITLE: &str = "Services";
pub const SERVICES_PAGE_SUBTITLE: &str = "What I can do for you";
pub const SERVICES_PAGE_DESCRIPTION: &str =
    "Design, development and consulting tailored to the stage your product is in.";
pub const SERVICES_PROCESS_TITLE: &str = "How I Work";
pub const SERVICES_PROCESS_SUBTITLE: &str = "A simple process from idea to launch";
pub const SERVICES_CTA_TITLE: &str = "Ready to start your project?";
pub const SERVICES_CTA_DESCRIPTION: &str = "Tell me about your idea and get a quote within 48 hours.";
pub const SERVICES_CTA_BUTTON_TEXT: &str = "Get in Touch";

/// Default work-process steps.
pub fn process_steps() -> Vec<ProcessStep> {
    [
        ("Discovery", "We discuss goals, audience and scope.", "search"),
        ("Planning", "I outline architecture, milestones and budget.", "clipboard"),
        ("Development", "Iterative builds with regular demos.", "code"),
        ("Launch", "Deployment, monitoring and handover.", "rocket"),
    ]
    .into_iter()
    .map(|(title, description, icon)| ProcessStep {
        title: title.to_string(),
        description: description.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}

// ---------------------------------------------------------------------------
// Projects page
// ---------------------------------------------------------------------------

pub const PROJECTS_PAGE_TITLE: &str = "Projects";
pub const PROJECTS_PAGE_SUBTITLE: &str = "Selected work";
pub const PROJECTS_PAGE_DESCRIPTION: &str =
    "A selection of products, client work and experiments I have built.";
pub const PROJECTS_CTA_TITLE: &str = "Have a project in mind?";
pub const PROJECTS_CTA_DESCRIPTION: &str = "Let's build something great together.";
pub const PROJECTS_CTA_BUTTON_TEXT: &str = "Start a Project";

/// Default project filter categories.
pub fn filter_categories() -> Vec<FilterCategory> {
    [
        ("Web", "web"),
        ("Mobile", "mobile"),
        ("Design", "design"),
    ]
    .into_iter()
    .map(|(label, value)| FilterCategory {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{validate_filter_categories, validate_nav_items, validate_process_steps};

    #[test]
    fn defaults_pass_their_own_validation() {
        assert!(validate_nav_items(&nav_items()).is_ok());
        assert!(validate_process_steps(&process_steps()).is_ok());
        assert!(validate_filter_categories(&filter_categories()).is_ok());
    }
}
