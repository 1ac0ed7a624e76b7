//! Read-only data sources for invitations and loader assets.
//!
//! The service never writes. Both files are authored out-of-band and the
//! file-backed sources re-read them on every call, so edits on disk are
//! visible to the next request without a restart.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::models::{SegmentAsset, StoredInvitation};

/// Source of the full invitation collection.
#[async_trait]
pub trait InviteSource: Send + Sync {
    /// Load every invitation record, in file order.
    ///
    /// Fails only when the collection itself is unreadable or not a JSON
    /// array. Individual records are not validated.
    async fn load_invitations(&self) -> Result<Vec<StoredInvitation>, StoreError>;
}

/// Source of the loader's segment asset.
#[async_trait]
pub trait SegmentSource: Send + Sync {
    async fn load_segments(&self) -> Result<SegmentAsset, StoreError>;
}

/// Invitations stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonInviteFile {
    path: PathBuf,
}

impl JsonInviteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InviteSource for JsonInviteFile {
    async fn load_invitations(&self) -> Result<Vec<StoredInvitation>, StoreError> {
        read_json(&self.path).await
    }
}

/// Segment asset stored as a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonSegmentFile {
    path: PathBuf,
}

impl JsonSegmentFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SegmentSource for JsonSegmentFile {
    async fn load_segments(&self) -> Result<SegmentAsset, StoreError> {
        read_json(&self.path).await
    }
}

/// Read and deserialize a JSON file.
async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let raw = tokio::fs::read(path).await.map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
