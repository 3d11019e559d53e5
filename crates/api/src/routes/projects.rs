//! Route definitions for the projects catalog.
//!
//! Two routers are provided:
//! - `router()` for the catalog mounted at `/admin/projects`
//! - `page_router()` for the page copy mounted at `/admin/projects-page`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Catalog routes mounted at `/admin/projects`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// PUT    /reorder                 -> reorder
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// POST   /{id}/toggle-featured    -> toggle_featured
/// POST   /{id}/toggle-published   -> toggle_published
/// POST   /{id}/image              -> upload_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route("/reorder", put(projects::reorder))
        .route(
            "/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/{id}/toggle-featured", post(projects::toggle_featured))
        .route("/{id}/toggle-published", post(projects::toggle_published))
        .route("/{id}/image", post(projects::upload_image))
}

/// Projects page copy mounted at `/admin/projects-page`.
pub fn page_router() -> Router<AppState> {
    Router::new().route("/", get(projects::get_page).put(projects::update_page))
}
