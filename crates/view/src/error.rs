/// Message shown when a lookup fails without a more specific reason.
pub const LOOKUP_FAILED_MESSAGE: &str = "Invitation not found or server error.";

/// Errors from the invitation API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Invitation API error ({status})")]
    Status { status: u16 },
}

impl ClientError {
    /// The text the page shows for this failure.
    ///
    /// Status failures collapse to [`LOOKUP_FAILED_MESSAGE`]; transport
    /// failures surface the transport's own description.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Status { .. } => LOOKUP_FAILED_MESSAGE.to_string(),
            ClientError::Request(err) => {
                let text = err.to_string();
                if text.trim().is_empty() {
                    LOOKUP_FAILED_MESSAGE.to_string()
                } else {
                    text
                }
            }
        }
    }
}

/// Errors from the terminal view outside the page's own states.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Invalid page location {0}")]
    InvalidLocation(String),

    #[error("Page driver stopped before the invitation settled")]
    DriverStopped,
}
