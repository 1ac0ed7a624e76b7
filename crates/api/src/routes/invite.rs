//! Route definitions for the invitation page's data endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::{invite, segments};
use crate::state::AppState;

/// Invitation routes mounted at `/api`.
///
/// ```text
/// GET /invite             -> get_invite
/// GET /ganesha-segments   -> get_segments
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invite", get(invite::get_invite))
        .route("/ganesha-segments", get(segments::get_segments))
}
