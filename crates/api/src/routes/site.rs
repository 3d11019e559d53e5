//! Public, unauthenticated routes backing the portfolio site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Public routes mounted at the root of `/api/v1`.
///
/// ```text
/// GET  /site              -> home
/// GET  /profile           -> profile
/// GET  /services          -> services
/// GET  /services/{slug}   -> service_by_slug
/// GET  /projects          -> projects (?category=)
/// GET  /projects/{slug}   -> project_by_slug
/// POST /contact           -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site", get(site::home))
        .route("/profile", get(site::profile))
        .route("/services", get(site::services))
        .route("/services/{slug}", get(site::service_by_slug))
        .route("/projects", get(site::projects))
        .route("/projects/{slug}", get(site::project_by_slug))
        .route("/contact", post(site::submit_contact))
}
