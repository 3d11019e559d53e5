//! Route definitions for the services catalog.
//!
//! Two routers are provided:
//! - `router()` for the catalog mounted at `/admin/services`
//! - `page_router()` for the page copy mounted at `/admin/services-page`

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Catalog routes mounted at `/admin/services`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// PUT    /reorder                -> reorder
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update
/// DELETE /{id}                   -> delete
/// POST   /{id}/toggle-active     -> toggle_active
/// POST   /{id}/toggle-featured   -> toggle_featured
/// POST   /{id}/image             -> upload_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list).post(services::create))
        .route("/reorder", put(services::reorder))
        .route(
            "/{id}",
            get(services::get_by_id)
                .put(services::update)
                .delete(services::delete),
        )
        .route("/{id}/toggle-active", post(services::toggle_active))
        .route("/{id}/toggle-featured", post(services::toggle_featured))
        .route("/{id}/image", post(services::upload_image))
}

/// Services page copy mounted at `/admin/services-page`.
///
/// ```text
/// GET /  -> get_page
/// PUT /  -> update_page
/// ```
pub fn page_router() -> Router<AppState> {
    Router::new().route("/", get(services::get_page).put(services::update_page))
}
