//! Route definitions for the `/admin/skills` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

/// Routes mounted at `/admin/skills`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// PUT    /reorder                   -> reorder
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
/// POST   /{id}/toggle-visibility    -> toggle_visibility
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list).post(skills::create))
        .route("/reorder", put(skills::reorder))
        .route(
            "/{id}",
            get(skills::get_by_id)
                .put(skills::update)
                .delete(skills::delete),
        )
        .route("/{id}/toggle-visibility", post(skills::toggle_visibility))
}
