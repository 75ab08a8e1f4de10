//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use oneline::adapters::{MockHttpClient, MockResponse};
use oneline::app::{App, AppMessage};
use oneline::models::{DisplayLine, LineTheme, Profile};
use oneline::session::{CredentialsManager, Session, SessionManager};
use oneline::store::StoreClient;
use oneline::traits::Response;

/// A signed-in session for tests. Not premium.
pub fn test_session() -> Session {
    let now = Utc::now();
    Session {
        user_id: "u-1".to_string(),
        email: Some("ada@example.com".to_string()),
        profile: Profile {
            id: "u-1".to_string(),
            username: "ada".to_string(),
            is_premium: false,
            created_at: now,
            updated_at: now,
        },
    }
}

/// A premium variant of [`test_session`].
pub fn premium_session() -> Session {
    let mut session = test_session();
    session.profile.is_premium = true;
    session
}

/// A display record for seeding app state directly.
pub fn display_line(id: &str, is_liked: bool, is_bookmarked: bool) -> DisplayLine {
    DisplayLine {
        id: id.to_string(),
        text: format!("line {}", id),
        author: "ada".to_string(),
        author_id: "u-1".to_string(),
        theme: LineTheme::Default,
        likes: 0,
        timestamp: Utc::now(),
        is_liked,
        is_bookmarked,
    }
}

/// A `lines` row as the store would return it, profile join included.
pub fn line_row_json(id: &str, text: &str, username: &str, at: DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "text": text,
        "author_id": "u-1",
        "theme": "Default",
        "likes_count": 0,
        "created_at": at.to_rfc3339(),
        "updated_at": at.to_rfc3339(),
        "profiles": { "username": username }
    })
}

/// A 200 response with the given body for the mock HTTP client.
pub fn ok(body: &str) -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
}

/// Build an [`App`] backed by a recording mock HTTP client.
///
/// The mock answers every request with an empty JSON array unless a more
/// specific response is configured.
pub fn test_app() -> (App, mpsc::UnboundedReceiver<AppMessage>, MockHttpClient) {
    let mock = MockHttpClient::new();
    mock.set_default_response(ok("[]"));
    let store = StoreClient::new("https://store.test", "anon-key", Arc::new(mock.clone()));
    let credentials = CredentialsManager::with_path(
        std::env::temp_dir().join(format!("oneline-test-{}.json", uuid::Uuid::new_v4())),
    );
    let sessions = SessionManager::new(store.clone(), credentials);
    let (tx, rx) = mpsc::unbounded_channel();
    (App::new(store, sessions, tx), rx, mock)
}
