//! Request handlers.
//!
//! Public handlers live in [`site`]; everything else backs the admin panel.
//! Handlers validate input, call the matching repository in `folio_db`, and
//! map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod dashboard;
pub mod experiences;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod services;
pub mod site;
pub mod skills;
pub mod testimonials;

/// How many suffixed candidates to try for a derived slug.
const MAX_SLUG_ATTEMPTS: u32 = 50;
