//! Vector path data for the loading animation.

use serde::{Deserialize, Serialize};

/// Path strings for the two layers of the loader artwork.
///
/// Unknown top-level keys are kept in `extra` so the asset round-trips
/// verbatim through the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAsset {
    /// Base layer paths.
    pub red: Vec<String>,
    /// Highlight layer paths, drawn one by one.
    pub gold: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
