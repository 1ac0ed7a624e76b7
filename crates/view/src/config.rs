use std::time::Duration;

use crate::state::DEFAULT_MIN_LOADING;

/// Terminal view configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Base URL of the invitation API (default: `http://localhost:3000`).
    pub api_url: String,
    /// Minimum time the loader stays visible after a lookup starts.
    pub min_loading: Duration,
}

impl ViewConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                 |
    /// |------------------|-------------------------|
    /// | `INVITE_API_URL` | `http://localhost:3000` |
    /// | `MIN_LOADING_MS` | `5000`                  |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("INVITE_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let min_loading = std::env::var("MIN_LOADING_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MIN_LOADING);

        Self {
            api_url,
            min_loading,
        }
    }
}
