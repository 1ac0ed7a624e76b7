//! Read-only data access for invitations and loader assets.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

use store::{InviteSource, SegmentSource};

/// Verify both backing files can be loaded.
pub async fn health_check(
    invites: &dyn InviteSource,
    segments: &dyn SegmentSource,
) -> Result<(), error::StoreError> {
    invites.load_invitations().await?;
    segments.load_segments().await?;
    Ok(())
}
