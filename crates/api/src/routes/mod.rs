pub mod auth;
pub mod dashboard;
pub mod experiences;
pub mod health;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod services;
pub mod site;
pub mod skills;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /site                                   home page bundle (public)
/// /profile                                profile (public)
/// /services                               active services + page copy (public)
/// /services/{slug}                        service detail (public)
/// /projects                               published projects, ?category= (public)
/// /projects/{slug}                        project detail (public)
/// /contact                                submit contact form (POST, public)
///
/// /auth/login                             login (public)
/// /auth/me                                current user (requires auth)
///
/// /admin/dashboard                        content counts (editor)
/// /admin/profile                          get, update (editor)
/// /admin/profile/{avatar,resume,logo}     file uploads (editor)
/// /admin/services                         list, create (editor)
/// /admin/services/reorder                 reorder (PUT)
/// /admin/services/{id}                    get, update, delete
/// /admin/services/{id}/toggle-active      toggle active (POST)
/// /admin/services/{id}/toggle-featured    toggle featured (POST)
/// /admin/services/{id}/image              upload image (POST)
/// /admin/services-page                    get, update page copy
/// /admin/projects                         list, create (editor)
/// /admin/projects/reorder                 reorder (PUT)
/// /admin/projects/{id}                    get, update, delete
/// /admin/projects/{id}/toggle-featured    toggle featured (POST)
/// /admin/projects/{id}/toggle-published   toggle published (POST)
/// /admin/projects/{id}/image              upload image (POST)
/// /admin/projects-page                    get, update page copy
/// /admin/skills                           list, create (editor)
/// /admin/skills/reorder                   reorder (PUT)
/// /admin/skills/{id}                      get, update, delete
/// /admin/skills/{id}/toggle-visibility    toggle visibility (POST)
/// /admin/testimonials                     list, create (editor)
/// /admin/testimonials/reorder             reorder (PUT)
/// /admin/testimonials/{id}                get, update, delete
/// /admin/testimonials/{id}/toggle-featured toggle featured (POST)
/// /admin/testimonials/{id}/image          upload image (POST)
/// /admin/experiences                      list, create (editor)
/// /admin/experiences/reorder              reorder (PUT)
/// /admin/experiences/{id}                 get, update, delete
///
/// /admin/messages                         list (admin only)
/// /admin/messages/{id}                    get (marks read), delete
/// /admin/messages/{id}/read               mark read (POST)
/// /admin/messages/{id}/unread             mark unread (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public site.
        .merge(site::router())
        // Authentication.
        .nest("/auth", auth::router())
        // Admin panel.
        .nest("/admin/dashboard", dashboard::router())
        .nest("/admin/profile", profile::router())
        .nest("/admin/services", services::router())
        .nest("/admin/services-page", services::page_router())
        .nest("/admin/projects", projects::router())
        .nest("/admin/projects-page", projects::page_router())
        .nest("/admin/skills", skills::router())
        .nest("/admin/testimonials", testimonials::router())
        .nest("/admin/experiences", experiences::router())
        .nest("/admin/messages", messages::router())
}
