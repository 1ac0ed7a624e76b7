//! Query parameter types for API handlers.

use serde::Deserialize;

/// Names identifying an invitation (`?bride=&groom=`).
///
/// Both are optional at the extractor level; presence is checked by the
/// handler, which answers with the service's own 400 body. When a key
/// repeats, the first value wins and unrelated keys are ignored.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct InviteParams {
    pub bride: Option<String>,
    pub groom: Option<String>,
}

impl From<Vec<(String, String)>> for InviteParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "bride" => &mut params.bride,
                "groom" => &mut params.groom,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}
