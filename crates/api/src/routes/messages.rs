//! Route definitions for the contact message inbox (admin only).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::messages;
use crate::state::AppState;

/// Routes mounted at `/admin/messages`.
///
/// ```text
/// GET    /              -> list (?unread_only=&limit=&offset=)
/// GET    /{id}          -> get_by_id (marks read)
/// DELETE /{id}          -> delete
/// POST   /{id}/read     -> mark_read
/// POST   /{id}/unread   -> mark_unread
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(messages::list))
        .route("/{id}", get(messages::get_by_id).delete(messages::delete))
        .route("/{id}/read", post(messages::mark_read))
        .route("/{id}/unread", post(messages::mark_unread))
}
