//! Page query string parsing.

use invite_core::error::CoreError;
use invite_core::slug::NamePair;
use reqwest::Url;

use crate::error::ViewError;

/// The `bride`/`groom` parameters of the page URL, as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub bride: Option<String>,
    pub groom: Option<String>,
}

impl PageQuery {
    pub fn new(bride: Option<&str>, groom: Option<&str>) -> Self {
        Self {
            bride: bride.map(str::to_string),
            groom: groom.map(str::to_string),
        }
    }

    /// Parse a page location.
    ///
    /// Accepts an absolute URL (`https://host/?bride=..`), a relative one
    /// (`/?bride=..`, `?bride=..`), or a bare query (`bride=..&groom=..`).
    /// When a key repeats, the first value wins.
    pub fn parse(location: &str) -> Result<Self, ViewError> {
        let url = if location.contains("://") {
            Url::parse(location)
        } else {
            let relative = location.trim_start_matches('/');
            let relative = if relative.contains('?') || !relative.contains('=') {
                relative.to_string()
            } else {
                format!("?{relative}")
            };
            Url::parse(&format!("http://localhost/{relative}"))
        }
        .map_err(|e| ViewError::InvalidLocation(format!("{location}: {e}")))?;

        let first = |key: &str| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
        };

        Ok(Self {
            bride: first("bride"),
            groom: first("groom"),
        })
    }

    /// Validated names, or the reason they are unusable.
    pub fn names(&self) -> Result<NamePair, CoreError> {
        NamePair::from_params(self.bride.clone(), self.groom.clone())
    }
}
