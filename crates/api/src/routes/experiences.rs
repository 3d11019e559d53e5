//! Route definitions for the `/admin/experiences` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::experiences;
use crate::state::AppState;

/// Routes mounted at `/admin/experiences`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// PUT    /reorder    -> reorder
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(experiences::list).post(experiences::create))
        .route("/reorder", put(experiences::reorder))
        .route(
            "/{id}",
            get(experiences::get_by_id)
                .put(experiences::update)
                .delete(experiences::delete),
        )
}
