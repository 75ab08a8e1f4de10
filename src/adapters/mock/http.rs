//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, and records every request so tests can assert on
//! exactly which lookups were issued.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PATCH, or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST/PATCH requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are matched by URL prefix so query-string variants of a store
/// endpoint can share one configuration. All requests are recorded for
/// later verification.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL prefix
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for URLs starting with the given prefix.
    pub fn set_response(&self, url_prefix: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url_prefix.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get recorded requests whose URL contains the given fragment.
    pub fn requests_matching(&self, fragment: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .cloned()
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record(&self, method: &str, url: &str, headers: &Headers, body: Option<&str>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(|b| b.to_string()),
        });
    }

    fn lookup(&self, url: &str) -> Result<Response, HttpError> {
        let responses = self.responses.lock().unwrap();
        // Longest matching prefix wins so more specific endpoints can
        // override a broad table-level configuration.
        let mut best: Option<(&String, &MockResponse)> = None;
        for (prefix, response) in responses.iter() {
            if url.starts_with(prefix.as_str()) {
                match best {
                    Some((existing, _)) if existing.len() >= prefix.len() => {}
                    _ => best = Some((prefix, response)),
                }
            }
        }

        let chosen = match best {
            Some((_, response)) => response.clone(),
            None => {
                let default = self.default_response.lock().unwrap();
                match default.as_ref() {
                    Some(response) => response.clone(),
                    None => {
                        return Err(HttpError::Other(format!(
                            "no mock response configured for {}",
                            url
                        )))
                    }
                }
            }
        };

        match chosen {
            MockResponse::Success(response) => Ok(response),
            MockResponse::Error(err) => Err(err),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("GET", url, headers, None);
        self.lookup(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("POST", url, headers, Some(body));
        self.lookup(url)
    }

    async fn patch(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("PATCH", url, headers, Some(body));
        self.lookup(url)
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record("DELETE", url, headers, None);
        self.lookup(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_returns_configured_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://store.test/rest/v1/lines",
            MockResponse::Success(Response::new(200, Bytes::from("[]"))),
        );

        let response = client
            .get("https://store.test/rest/v1/lines?order=created_at.desc", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(200, Bytes::from("[]"))));

        client.get("https://store.test/a", &Headers::new()).await.unwrap();
        client
            .post("https://store.test/b", "{}", &Headers::new())
            .await
            .unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_mock_longest_prefix_wins() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://store.test/rest/v1",
            MockResponse::Success(Response::new(200, Bytes::from("broad"))),
        );
        client.set_response(
            "https://store.test/rest/v1/likes",
            MockResponse::Success(Response::new(200, Bytes::from("narrow"))),
        );

        let response = client
            .get("https://store.test/rest/v1/likes?user_id=eq.u1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.text().unwrap(), "narrow");
    }

    #[tokio::test]
    async fn test_mock_unconfigured_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("https://store.test/missing", &Headers::new()).await;
        assert!(result.is_err());
    }
}
