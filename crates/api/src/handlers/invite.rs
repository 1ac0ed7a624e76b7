//! Handler for the invitation lookup.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use invite_core::error::CoreError;
use invite_core::slug::NamePair;
use invite_db::models::StoredInvitation;
use invite_db::repositories::InviteRepo;

use crate::error::{AppError, AppResult};
use crate::query::InviteParams;
use crate::state::AppState;

/// GET /api/invite?bride=&groom=
///
/// Return the first invitation whose slug matches the bride/groom pair,
/// ignoring case, exactly as stored. Missing names are rejected before the
/// store is read.
pub async fn get_invite(
    State(state): State<AppState>,
    params: Result<Query<InviteParams>, QueryRejection>,
) -> AppResult<Json<StoredInvitation>> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let names = NamePair::from_params(params.bride, params.groom)?;

    let invite = InviteRepo::find_by_names(state.invites.as_ref(), &names)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Invitation",
                key: names.slug_key(),
            })
        })?;

    tracing::info!(slug = invite.slug(), "Invitation served");

    Ok(Json(invite))
}
