//! Route definitions for the `/admin/testimonials` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/admin/testimonials`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// PUT    /reorder                 -> reorder
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// POST   /{id}/toggle-featured    -> toggle_featured
/// POST   /{id}/image              -> upload_image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list).post(testimonials::create))
        .route("/reorder", put(testimonials::reorder))
        .route(
            "/{id}",
            get(testimonials::get_by_id)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
        .route("/{id}/toggle-featured", post(testimonials::toggle_featured))
        .route("/{id}/image", post(testimonials::upload_image))
}
