//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use brewlog::api::ApiClient;
use brewlog::config::{LoginHash, ServerConfig};
use brewlog::session::{SessionStore, StoredSession};
use brewlog::ui::app::App;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use mock_server::{CapturedRequest, MockResponse, MockServer};

pub const LAGER77: &str = r#"{"beers": [
    {"id": "abc", "name": "Lager77", "style": "Lager", "abv": 5.2, "ibu": "20",
     "description": "Crisp.", "brewery": "Seventy Seven", "reviews": []},
    {"id": "def", "name": "Stout Nine", "reviews": null}
]}"#;

pub const LAGER77_REVIEWED: &str = r#"{"beers": [
    {"id": "abc", "name": "Lager77", "reviews": [
        {"author": {"_id": "u1", "firstName": "Alice", "lastName": "Liddell"},
         "comment": "Great lager", "date": "2026-01-01T00:00:00Z"}
    ]}
]}"#;

pub const ALICE: &str =
    r#"{"_id": "u1", "username": "alice", "firstName": "Alice", "lastName": "Liddell"}"#;

/// Session file path inside a fresh temp dir.
pub fn temp_session() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("brewlog").join("session.json");
    (dir, path)
}

pub fn make_app(session_path: &Path) -> App {
    App::new(SessionStore::new(session_path.to_path_buf()))
}

/// App with alice's session already persisted and restored.
pub fn logged_in_app(session_path: &Path) -> App {
    SessionStore::new(session_path.to_path_buf())
        .save(&StoredSession {
            login_hash: LoginHash::from_credentials("alice", "s3cret"),
            user_id: "u1".to_string(),
        })
        .expect("save session");
    let mut app = make_app(session_path);
    assert!(app.restore_session().expect("restore session"));
    app
}

pub fn api_for(server: &MockServer) -> ApiClient {
    let config = ServerConfig {
        base_url: server.base_url(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    ApiClient::new(&config).expect("client builds")
}
