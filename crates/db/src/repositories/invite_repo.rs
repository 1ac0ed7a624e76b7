//! Lookup over the invitation collection.

use invite_core::slug::{slug_matches, NamePair};

use crate::error::StoreError;
use crate::models::StoredInvitation;
use crate::store::InviteSource;

/// Provides lookups over an [`InviteSource`].
pub struct InviteRepo;

impl InviteRepo {
    /// Find the invitation for a bride/groom pair.
    ///
    /// Loads the whole collection and returns the first record whose slug
    /// equals `lower(bride) + "-" + lower(groom)`, ignoring case. Slugs are
    /// not checked for uniqueness; later duplicates are never returned.
    /// Records without a string slug are skipped.
    pub async fn find_by_names(
        source: &dyn InviteSource,
        names: &NamePair,
    ) -> Result<Option<StoredInvitation>, StoreError> {
        let key = names.slug_key();
        let records = source.load_invitations().await?;
        tracing::debug!(key = %key, records = records.len(), "Searching invitations");

        Ok(records
            .into_iter()
            .find(|record| record.slug().is_some_and(|slug| slug_matches(slug, &key))))
    }
}
