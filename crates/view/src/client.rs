//! HTTP client for the invitation API.
//!
//! Wraps `GET /api/invite` and `GET /api/ganesha-segments` using
//! [`reqwest`]. The page driver talks to these through the
//! [`InviteLookup`] and [`SegmentFeed`] traits so it can be exercised
//! without a server.

use async_trait::async_trait;
use invite_core::slug::NamePair;
use invite_db::models::{InvitationRecord, SegmentAsset};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Resolves a bride/groom pair to an invitation.
#[async_trait]
pub trait InviteLookup: Send + Sync + 'static {
    async fn lookup(&self, names: &NamePair) -> Result<InvitationRecord, ClientError>;
}

/// Supplies the loader's segment asset.
#[async_trait]
pub trait SegmentFeed: Send + Sync + 'static {
    async fn segments(&self) -> Result<SegmentAsset, ClientError>;
}

/// HTTP client for one invitation API deployment.
#[derive(Debug, Clone)]
pub struct InviteClient {
    client: reqwest::Client,
    api_url: String,
}

impl InviteClient {
    /// Create a new client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:3000`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Fetch the invitation for a bride/groom pair.
    ///
    /// Names are sent as given; the service does the case folding.
    pub async fn fetch_invite(&self, names: &NamePair) -> Result<InvitationRecord, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/invite", self.api_url))
            .query(&[("bride", names.bride.as_str()), ("groom", names.groom.as_str())])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the loader's segment asset.
    pub async fn fetch_segments(&self) -> Result<SegmentAsset, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/ganesha-segments", self.api_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Turn a non-2xx status into [`ClientError::Status`], otherwise decode.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), url = %response.url(), "Invitation API error");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl InviteLookup for InviteClient {
    async fn lookup(&self, names: &NamePair) -> Result<InvitationRecord, ClientError> {
        self.fetch_invite(names).await
    }
}

#[async_trait]
impl SegmentFeed for InviteClient {
    async fn segments(&self) -> Result<SegmentAsset, ClientError> {
        self.fetch_segments().await
    }
}
