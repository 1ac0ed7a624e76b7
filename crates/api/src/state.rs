use std::sync::Arc;

use invite_db::store::{InviteSource, JsonInviteFile, JsonSegmentFile, SegmentSource};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Read-only invitation collection.
    pub invites: Arc<dyn InviteSource>,
    /// Read-only loader asset.
    pub segments: Arc<dyn SegmentSource>,
}

impl AppState {
    /// State backed by the JSON files named in `config`.
    pub fn from_config(config: ServerConfig) -> Self {
        let invites = Arc::new(JsonInviteFile::new(config.invites_path.clone()));
        let segments = Arc::new(JsonSegmentFile::new(config.segments_path.clone()));

        Self {
            config: Arc::new(config),
            invites,
            segments,
        }
    }
}
