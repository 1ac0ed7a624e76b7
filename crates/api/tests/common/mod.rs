#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use invite_api::config::ServerConfig;
use invite_api::router::build_app_router;
use invite_api::state::AppState;

/// Invitation file matching the Kavya/Vaibhav scenario.
pub const KAVYA_VAIBHAV: &str = r#"[
    {
        "slug": "kavya-vaibhav",
        "brideName": "Kavya",
        "groomName": "Vaibhav",
        "weddingDate": "12 Dec 2025",
        "events": []
    }
]"#;

/// Minimal segment asset.
pub const SEGMENTS: &str = r#"{ "red": ["M0 0L10 10"], "gold": ["M1 1", "M2 2"] }"#;

/// Backing files for one test, removed when dropped.
pub struct Fixtures {
    pub dir: TempDir,
    pub invites_path: PathBuf,
    pub segments_path: PathBuf,
}

impl Fixtures {
    /// Write both files into a fresh temp directory.
    pub fn new(invites: &str, segments: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let invites_path = dir.path().join("invites.json");
        let segments_path = dir.path().join("ganesha_segments.json");
        std::fs::write(&invites_path, invites).unwrap();
        std::fs::write(&segments_path, segments).unwrap();

        Self {
            dir,
            invites_path,
            segments_path,
        }
    }

    /// The standard Kavya/Vaibhav invitation and a small asset.
    pub fn standard() -> Self {
        Self::new(KAVYA_VAIBHAV, SEGMENTS)
    }

    /// Paths that point at files which do not exist.
    pub fn missing() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let invites_path = dir.path().join("invites.json");
        let segments_path = dir.path().join("ganesha_segments.json");

        Self {
            dir,
            invites_path,
            segments_path,
        }
    }
}

/// Build a test `ServerConfig` pointing at the given fixtures.
pub fn test_config(fixtures: &Fixtures) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        invites_path: fixtures.invites_path.clone(),
        segments_path: fixtures.segments_path.clone(),
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(fixtures: &Fixtures) -> Router {
    build_app_router(AppState::from_config(test_config(fixtures)))
}

/// Issue a GET request against the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
