//! Store client for the hosted data platform.
//!
//! All persistence and query logic lives behind this façade. The hosted
//! store exposes PostgREST-style REST endpoints under `/rest/v1` for the
//! `lines`, `likes`, `bookmarks`, and `profiles` tables, plus the auth
//! endpoints under `/auth/v1`. The client is generic over [`HttpClient`] so
//! tests can observe exactly which requests are issued.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{OneLineError, OneLineResult};
use crate::feed::DayWindow;
use crate::models::{
    BookmarkRow, LineRow, LineTheme, MembershipLineId, MembershipPair, NewLine, Profile,
    ProfileUpdate,
};
use crate::traits::{Headers, HttpClient, Response};

/// Default base URL for the hosted store.
pub const DEFAULT_STORE_URL: &str = "https://oneline-store.example.com";

/// Environment variable overriding the store base URL.
pub const STORE_URL_ENV: &str = "ONELINE_STORE_URL";

/// Environment variable providing the store API key.
pub const STORE_KEY_ENV: &str = "ONELINE_STORE_KEY";

/// Response from the auth endpoints (`/auth/v1/token`, `/auth/v1/signup`).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub user: AuthUser,
}

/// Authenticated identity as returned by the auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: SignupData<'a>,
}

#[derive(Serialize)]
struct SignupData<'a> {
    username: &'a str,
}

/// Client for the hosted store's REST and auth surfaces.
///
/// Cloning is cheap; clones share the bearer token so a sign-in observed by
/// one consumer is observed by all.
#[derive(Clone)]
pub struct StoreClient {
    base_url: String,
    api_key: String,
    http: Arc<dyn HttpClient>,
    token: Arc<Mutex<Option<String>>>,
}

impl StoreClient {
    /// Create a client against the given base URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            http,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a client from the environment, falling back to the defaults.
    pub fn from_env(http: Arc<dyn HttpClient>) -> Self {
        let base_url =
            std::env::var(STORE_URL_ENV).unwrap_or_else(|_| DEFAULT_STORE_URL.to_string());
        let api_key = std::env::var(STORE_KEY_ENV).unwrap_or_default();
        Self::new(base_url, api_key, http)
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install the bearer token used for authenticated requests.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.lock().unwrap() = Some(token.into());
    }

    /// Drop the bearer token (sign-out).
    pub fn clear_token(&self) {
        *self.token.lock().unwrap() = None;
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("apikey".to_string(), self.api_key.clone());
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(token) = self.token.lock().unwrap().as_ref() {
            headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        }
        headers
    }

    fn check(response: Response) -> OneLineResult<Response> {
        if response.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_else(|_| "<non-utf8 body>".to_string());
        Err(OneLineError::Store {
            status: response.status,
            message,
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> OneLineResult<T> {
        let response = self.http.get(url, &self.headers()).await?;
        let response = Self::check(response)?;
        Ok(response.json()?)
    }

    // ------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------

    /// Fetch the feed: all lines newest-first with the author profile
    /// embedded, optionally restricted to a calendar-day window.
    pub async fn fetch_lines(&self, window: Option<&DayWindow>) -> OneLineResult<Vec<LineRow>> {
        let mut url = format!(
            "{}/rest/v1/lines?select=*,profiles(username)&order=created_at.desc",
            self.base_url
        );
        if let Some(window) = window {
            url.push_str(&format!(
                "&created_at=gte.{}&created_at=lte.{}",
                urlencoding::encode(&window.start().to_rfc3339()),
                urlencoding::encode(&window.end().to_rfc3339()),
            ));
        }
        self.get_json(&url).await
    }

    /// Fetch the lines authored by one user, newest-first.
    pub async fn fetch_lines_by_author(&self, author_id: &str) -> OneLineResult<Vec<LineRow>> {
        let url = format!(
            "{}/rest/v1/lines?select=*,profiles(username)&author_id=eq.{}&order=created_at.desc",
            self.base_url,
            urlencoding::encode(author_id),
        );
        self.get_json(&url).await
    }

    /// Fetch the lines a user has bookmarked, with authors embedded.
    pub async fn fetch_bookmarked_lines(&self, user_id: &str) -> OneLineResult<Vec<LineRow>> {
        let url = format!(
            "{}/rest/v1/bookmarks?select=lines(*,profiles(username))&user_id=eq.{}",
            self.base_url,
            urlencoding::encode(user_id),
        );
        let rows: Vec<BookmarkRow> = self.get_json(&url).await?;
        Ok(rows.into_iter().map(|row| row.lines).collect())
    }

    /// Create a new line. The store assigns id, counts, and timestamps.
    pub async fn insert_line(
        &self,
        author_id: &str,
        text: &str,
        theme: LineTheme,
    ) -> OneLineResult<()> {
        let url = format!("{}/rest/v1/lines", self.base_url);
        let payload = NewLine {
            text: text.to_string(),
            author_id: author_id.to_string(),
            theme,
        };
        let body = serde_json::to_string(&payload)?;
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::check(response)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Likes / bookmarks
    // ------------------------------------------------------------------

    /// Membership lookup against one relation table, scoped to exactly the
    /// given line-id set. Never issues a full-table scan; an empty id set
    /// short-circuits to an empty result without a request.
    async fn membership(
        &self,
        table: &str,
        user_id: &str,
        line_ids: &[String],
    ) -> OneLineResult<HashSet<String>> {
        if line_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let id_list = line_ids
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/rest/v1/{}?select=line_id&user_id=eq.{}&line_id=in.({})",
            self.base_url,
            table,
            urlencoding::encode(user_id),
            id_list,
        );
        let rows: Vec<MembershipLineId> = self.get_json(&url).await?;
        Ok(rows.into_iter().map(|row| row.line_id).collect())
    }

    /// Which of the given lines the user has liked.
    pub async fn likes_for(
        &self,
        user_id: &str,
        line_ids: &[String],
    ) -> OneLineResult<HashSet<String>> {
        self.membership("likes", user_id, line_ids).await
    }

    /// Which of the given lines the user has bookmarked.
    pub async fn bookmarks_for(
        &self,
        user_id: &str,
        line_ids: &[String],
    ) -> OneLineResult<HashSet<String>> {
        self.membership("bookmarks", user_id, line_ids).await
    }

    async fn insert_pair(&self, table: &str, user_id: &str, line_id: &str) -> OneLineResult<()> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let payload = MembershipPair {
            user_id: user_id.to_string(),
            line_id: line_id.to_string(),
        };
        let body = serde_json::to_string(&payload)?;
        let response = self.http.post(&url, &body, &self.headers()).await?;
        Self::check(response)?;
        Ok(())
    }

    async fn delete_pair(&self, table: &str, user_id: &str, line_id: &str) -> OneLineResult<()> {
        let url = format!(
            "{}/rest/v1/{}?user_id=eq.{}&line_id=eq.{}",
            self.base_url,
            table,
            urlencoding::encode(user_id),
            urlencoding::encode(line_id),
        );
        let response = self.http.delete(&url, &self.headers()).await?;
        Self::check(response)?;
        Ok(())
    }

    /// Record a like for (user, line).
    pub async fn insert_like(&self, user_id: &str, line_id: &str) -> OneLineResult<()> {
        self.insert_pair("likes", user_id, line_id).await
    }

    /// Remove the like for (user, line).
    pub async fn delete_like(&self, user_id: &str, line_id: &str) -> OneLineResult<()> {
        self.delete_pair("likes", user_id, line_id).await
    }

    /// Record a bookmark for (user, line).
    pub async fn insert_bookmark(&self, user_id: &str, line_id: &str) -> OneLineResult<()> {
        self.insert_pair("bookmarks", user_id, line_id).await
    }

    /// Remove the bookmark for (user, line).
    pub async fn delete_bookmark(&self, user_id: &str, line_id: &str) -> OneLineResult<()> {
        self.delete_pair("bookmarks", user_id, line_id).await
    }

    // ------------------------------------------------------------------
    // Profiles
    // ------------------------------------------------------------------

    /// Fetch the profile for one identity.
    pub async fn fetch_profile(&self, user_id: &str) -> OneLineResult<Profile> {
        let url = format!(
            "{}/rest/v1/profiles?id=eq.{}",
            self.base_url,
            urlencoding::encode(user_id),
        );
        let mut rows: Vec<Profile> = self.get_json(&url).await?;
        rows.pop().ok_or_else(|| OneLineError::Store {
            status: 404,
            message: format!("no profile for {}", user_id),
        })
    }

    /// Apply a partial profile update and return the updated row.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> OneLineResult<Profile> {
        let url = format!(
            "{}/rest/v1/profiles?id=eq.{}",
            self.base_url,
            urlencoding::encode(user_id),
        );
        let body = serde_json::to_string(update)?;
        let mut headers = self.headers();
        headers.insert("Prefer".to_string(), "return=representation".to_string());
        let response = self.http.patch(&url, &body, &headers).await?;
        let response = Self::check(response)?;
        let mut rows: Vec<Profile> = response.json()?;
        rows.pop().ok_or_else(|| OneLineError::Store {
            status: 404,
            message: format!("no profile for {}", user_id),
        })
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> OneLineResult<AuthSession> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let body = serde_json::to_string(&PasswordGrant { email, password })?;
        let response = self.http.post(&url, &body, &self.headers()).await?;
        let response = Self::check(response)?;
        Ok(response.json()?)
    }

    /// Create an account; the store provisions the profile row at signup.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> OneLineResult<AuthSession> {
        let url = format!("{}/auth/v1/signup", self.base_url);
        let body = serde_json::to_string(&SignupRequest {
            email,
            password,
            data: SignupData { username },
        })?;
        let response = self.http.post(&url, &body, &self.headers()).await?;
        let response = Self::check(response)?;
        Ok(response.json()?)
    }
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url)
            .field("signed_in", &self.token.lock().unwrap().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use bytes::Bytes;

    fn client_with(mock: &MockHttpClient) -> StoreClient {
        StoreClient::new("https://store.test", "anon-key", Arc::new(mock.clone()))
    }

    fn ok(body: &str) -> MockResponse {
        MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
    }

    #[tokio::test]
    async fn test_fetch_lines_orders_newest_first() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok("[]"));
        let client = client_with(&mock);

        client.fetch_lines(None).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].url.contains("order=created_at.desc"));
        assert!(requests[0].url.contains("profiles(username)"));
        assert!(!requests[0].url.contains("created_at=gte"));
    }

    #[tokio::test]
    async fn test_fetch_lines_applies_day_window() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok("[]"));
        let client = client_with(&mock);

        let window = DayWindow::parse("2024-03-15");
        client.fetch_lines(Some(&window)).await.unwrap();

        let url = &mock.requests()[0].url;
        assert!(url.contains("created_at=gte."));
        assert!(url.contains("created_at=lte."));
    }

    #[tokio::test]
    async fn test_membership_scoped_to_id_set() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok(r#"[{"line_id":"l-1"}]"#));
        let client = client_with(&mock);

        let ids = vec!["l-1".to_string(), "l-2".to_string()];
        let liked = client.likes_for("u-1", &ids).await.unwrap();

        assert!(liked.contains("l-1"));
        assert!(!liked.contains("l-2"));
        let url = &mock.requests()[0].url;
        assert!(url.contains("user_id=eq.u-1"));
        assert!(url.contains("line_id=in.(l-1,l-2)"));
        assert!(url.contains("select=line_id"));
    }

    #[tokio::test]
    async fn test_membership_empty_id_set_issues_no_request() {
        let mock = MockHttpClient::new();
        let client = client_with(&mock);

        let liked = client.likes_for("u-1", &[]).await.unwrap();

        assert!(liked.is_empty());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bearer_token_applied_after_set() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok("[]"));
        let client = client_with(&mock);

        client.fetch_lines(None).await.unwrap();
        client.set_token("tok-123");
        client.fetch_lines(None).await.unwrap();

        let requests = mock.requests();
        assert!(!requests[0].headers.contains_key("Authorization"));
        assert_eq!(
            requests[1].headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
    }

    #[tokio::test]
    async fn test_error_status_maps_to_store_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from("boom"),
        )));
        let client = client_with(&mock);

        let err = client.fetch_lines(None).await.unwrap_err();
        match err {
            OneLineError::Store { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_like_targets_exact_pair() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok(""));
        let client = client_with(&mock);

        client.delete_like("u-1", "l-9").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "DELETE");
        assert!(requests[0].url.contains("likes?user_id=eq.u-1&line_id=eq.l-9"));
    }

    #[tokio::test]
    async fn test_update_profile_requests_representation() {
        let mock = MockHttpClient::new();
        mock.set_default_response(ok(
            r#"[{"id":"u-1","username":"grace","is_premium":true,
                 "created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-02T00:00:00Z"}]"#,
        ));
        let client = client_with(&mock);

        let profile = client
            .update_profile("u-1", &ProfileUpdate::premium(true))
            .await
            .unwrap();

        assert!(profile.is_premium);
        let requests = mock.requests();
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].body.as_deref(), Some(r#"{"is_premium":true}"#));
        assert_eq!(
            requests[0].headers.get("Prefer").map(String::as_str),
            Some("return=representation")
        );
    }

    #[test]
    #[serial_test::serial]
    fn from_env_reads_url_and_key() {
        std::env::set_var(STORE_URL_ENV, "https://env.test");
        std::env::set_var(STORE_KEY_ENV, "env-key");
        let client = StoreClient::from_env(Arc::new(MockHttpClient::new()));
        assert_eq!(client.base_url(), "https://env.test");

        std::env::remove_var(STORE_URL_ENV);
        std::env::remove_var(STORE_KEY_ENV);
        let client = StoreClient::from_env(Arc::new(MockHttpClient::new()));
        assert_eq!(client.base_url(), DEFAULT_STORE_URL);
    }
}
