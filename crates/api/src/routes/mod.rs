pub mod health;
pub mod invite;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /invite                 invitation lookup by bride/groom
/// /ganesha-segments       loader segment asset
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(invite::router())
}
