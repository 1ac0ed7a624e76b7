use axum::extract::State;
use axum::Json;
use invite_db::models::SegmentAsset;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/ganesha-segments
///
/// Return the loader's segment asset exactly as stored.
pub async fn get_segments(State(state): State<AppState>) -> AppResult<Json<SegmentAsset>> {
    let asset = state
        .segments
        .load_segments()
        .await
        .map_err(AppError::SegmentsUnavailable)?;

    Ok(Json(asset))
}
