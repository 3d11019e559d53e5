//! Route definitions for the profile singleton.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/admin/profile`.
///
/// ```text
/// GET  /         -> get
/// PUT  /         -> update
/// POST /avatar   -> upload_avatar (multipart)
/// POST /resume   -> upload_resume (multipart)
/// POST /logo     -> upload_logo (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get).put(profile::update))
        .route("/avatar", post(profile::upload_avatar))
        .route("/resume", post(profile::upload_resume))
        .route("/logo", post(profile::upload_logo))
}
