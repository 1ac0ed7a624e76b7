//! Invitation slug keys.
//!
//! An invitation is addressed by its slug, canonically `"<bride>-<groom>"`
//! in lowercase. Lookups compare case-insensitively on both sides: the key
//! built from the requested names and the slug stored on each record.

use crate::error::CoreError;

/// Message used when either name is missing from a request.
pub const MISSING_NAMES: &str = "Missing bride or groom parameters";

/// A validated bride/groom pair taken from request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    pub bride: String,
    pub groom: String,
}

impl NamePair {
    /// Build a pair from optional query parameters.
    ///
    /// Absent and empty values are both treated as missing.
    pub fn from_params(bride: Option<String>, groom: Option<String>) -> Result<Self, CoreError> {
        match (non_empty(bride), non_empty(groom)) {
            (Some(bride), Some(groom)) => Ok(Self { bride, groom }),
            _ => Err(CoreError::Validation(MISSING_NAMES.to_string())),
        }
    }

    /// The lookup key for this pair. See [`slug_key`].
    pub fn slug_key(&self) -> String {
        slug_key(&self.bride, &self.groom)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Build the comparison key `lower(bride) + "-" + lower(groom)`.
///
/// # Examples
///
/// ```
/// use invite_core::slug::slug_key;
///
/// assert_eq!(slug_key("Kavya", "Vaibhav"), "kavya-vaibhav");
/// assert_eq!(slug_key("kavya", "VAIBHAV"), "kavya-vaibhav");
/// ```
pub fn slug_key(bride: &str, groom: &str) -> String {
    format!("{}-{}", bride.to_lowercase(), groom.to_lowercase())
}

/// Whether a stored slug matches an already lower-cased lookup key.
pub fn slug_matches(stored_slug: &str, key: &str) -> bool {
    stored_slug.to_lowercase() == key
}
