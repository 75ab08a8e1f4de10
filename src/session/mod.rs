//! Session provider: the current authenticated identity and profile.
//!
//! The session is a snapshot. Consumers read `Option<Session>` and never see
//! a partially-updated value: sign-in, sign-out, and profile updates each
//! replace the whole snapshot at once.

pub mod credentials;

pub use credentials::{Credentials, CredentialsManager};

use crate::error::{OneLineError, OneLineResult};
use crate::models::{Profile, ProfileUpdate};
use crate::store::StoreClient;

/// One complete session snapshot: identity plus profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub profile: Profile,
}

impl Session {
    /// The viewer's display name.
    pub fn username(&self) -> &str {
        &self.profile.username
    }

    /// Whether the viewer's account carries the premium flag.
    pub fn is_premium(&self) -> bool {
        self.profile.is_premium
    }
}

/// Drives sign-in, sign-out, restore, and profile updates against the store,
/// keeping the credentials file and the store client's token in step.
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: StoreClient,
    credentials: CredentialsManager,
}

impl SessionManager {
    /// Create a session manager.
    pub fn new(store: StoreClient, credentials: CredentialsManager) -> Self {
        Self { store, credentials }
    }

    /// Attempt to restore a session from the credentials file.
    ///
    /// A stored token plus a successful profile fetch yields a signed-in
    /// session; anything else yields an anonymous start. Restore failures
    /// are logged, never surfaced.
    pub async fn restore(&self) -> Option<Session> {
        let creds = self.credentials.load();
        if !creds.is_complete() {
            return None;
        }
        let token = creds.access_token.as_deref().unwrap_or_default();
        let user_id = creds.user_id.as_deref().unwrap_or_default();
        self.store.set_token(token);

        match self.store.fetch_profile(user_id).await {
            Ok(profile) => Some(Session {
                user_id: user_id.to_string(),
                email: creds.email.clone(),
                profile,
            }),
            Err(err) => {
                tracing::warn!(code = err.error_code(), "session restore failed: {}", err);
                self.store.clear_token();
                None
            }
        }
    }

    /// Sign in with email and password, persisting credentials on success.
    pub async fn sign_in(&self, email: &str, password: &str) -> OneLineResult<Session> {
        let auth = self.store.sign_in(email, password).await?;
        self.finish_auth(auth).await
    }

    /// Create an account and sign in, persisting credentials on success.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> OneLineResult<Session> {
        let auth = self.store.sign_up(email, password, username).await?;
        self.finish_auth(auth).await
    }

    async fn finish_auth(&self, auth: crate::store::AuthSession) -> OneLineResult<Session> {
        self.store.set_token(&auth.access_token);
        let profile = match self.store.fetch_profile(&auth.user.id).await {
            Ok(profile) => profile,
            Err(err) => {
                // No half-signed-in state: roll the token back.
                self.store.clear_token();
                return Err(err);
            }
        };

        self.credentials.save(&Credentials {
            access_token: Some(auth.access_token),
            user_id: Some(auth.user.id.clone()),
            email: auth.user.email.clone(),
        });

        Ok(Session {
            user_id: auth.user.id,
            email: auth.user.email,
            profile,
        })
    }

    /// Sign out: clear the in-memory token and the credentials file.
    pub fn sign_out(&self) {
        self.store.clear_token();
        self.credentials.clear();
    }

    /// Apply a partial profile update and return the replacement snapshot.
    pub async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> OneLineResult<Session> {
        if update.is_empty() {
            return Err(OneLineError::validation("Nothing to update."));
        }
        let profile = self.store.update_profile(&session.user_id, update).await?;
        Ok(Session {
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;
    use std::sync::Arc;
    use tempfile::TempDir;

    const PROFILE_JSON: &str = r#"[{
        "id": "u-1",
        "username": "ada",
        "is_premium": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }]"#;

    const AUTH_JSON: &str = r#"{
        "access_token": "tok-1",
        "user": { "id": "u-1", "email": "ada@example.com" }
    }"#;

    fn ok(body: &str) -> MockResponse {
        MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
    }

    fn fixture(dir: &TempDir) -> (MockHttpClient, SessionManager) {
        let mock = MockHttpClient::new();
        let store = StoreClient::new("https://store.test", "anon-key", Arc::new(mock.clone()));
        let credentials = CredentialsManager::with_path(dir.path().join(".credentials.json"));
        let manager = SessionManager::new(store, credentials);
        (mock, manager)
    }

    #[tokio::test]
    async fn test_sign_in_persists_credentials_and_loads_profile() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response("https://store.test/rest/v1/profiles", ok(PROFILE_JSON));

        let session = manager.sign_in("ada@example.com", "pw").await.unwrap();

        assert_eq!(session.user_id, "u-1");
        assert_eq!(session.username(), "ada");
        assert!(!session.is_premium());

        let stored = CredentialsManager::with_path(dir.path().join(".credentials.json")).load();
        assert_eq!(stored.access_token.as_deref(), Some("tok-1"));
        assert_eq!(stored.user_id.as_deref(), Some("u-1"));
    }

    #[tokio::test]
    async fn test_restore_round_trip() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response("https://store.test/rest/v1/profiles", ok(PROFILE_JSON));

        manager.sign_in("ada@example.com", "pw").await.unwrap();
        let restored = manager.restore().await.unwrap();
        assert_eq!(restored.user_id, "u-1");
        assert_eq!(restored.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_restore_without_credentials_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);

        assert!(manager.restore().await.is_none());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_sign_out_clears_everything() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response("https://store.test/rest/v1/profiles", ok(PROFILE_JSON));

        manager.sign_in("ada@example.com", "pw").await.unwrap();
        manager.sign_out();

        assert!(manager.restore().await.is_none());
        // The next store request must not carry the old bearer token.
        mock.clear_requests();
        mock.set_default_response(ok("[]"));
        let store = StoreClient::new("https://store.test", "anon-key", Arc::new(mock.clone()));
        store.fetch_lines(None).await.unwrap();
        assert!(!mock.requests()[0].headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_rolls_back_sign_in() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response(
            "https://store.test/rest/v1/profiles",
            MockResponse::Success(Response::new(500, Bytes::from("boom"))),
        );

        assert!(manager.sign_in("ada@example.com", "pw").await.is_err());
        // No credentials were persisted.
        assert!(manager.restore().await.is_none());
    }

    #[tokio::test]
    async fn test_update_profile_replaces_snapshot() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response("https://store.test/rest/v1/profiles", ok(PROFILE_JSON));

        let session = manager.sign_in("ada@example.com", "pw").await.unwrap();

        mock.set_response(
            "https://store.test/rest/v1/profiles",
            ok(r#"[{
                "id": "u-1",
                "username": "ada",
                "is_premium": true,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            }]"#),
        );

        let updated = manager
            .update_profile(&session, &ProfileUpdate::premium(true))
            .await
            .unwrap();
        assert!(updated.is_premium());
        // The original snapshot is untouched; the caller swaps it wholesale.
        assert!(!session.is_premium());
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected_locally() {
        let dir = TempDir::new().unwrap();
        let (mock, manager) = fixture(&dir);
        mock.set_response("https://store.test/auth/v1/token", ok(AUTH_JSON));
        mock.set_response("https://store.test/rest/v1/profiles", ok(PROFILE_JSON));
        let session = manager.sign_in("ada@example.com", "pw").await.unwrap();

        mock.clear_requests();
        let err = manager
            .update_profile(&session, &ProfileUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_REJECTED");
        assert!(mock.requests().is_empty());
    }
}
