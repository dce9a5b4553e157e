//! HTTP client for the parking service's statistics endpoint.

use reqwest::{header, StatusCode};
use thiserror::Error;

use crate::model::stats::StatisticsPayload;

/// Everything that can go wrong during one statistics fetch. All variants
/// collapse into the same coarse error state at the dashboard boundary; the
/// distinction exists for logging.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("statistics request failed: {0}")]
    Network(reqwest::Error),
    #[error("statistics endpoint returned HTTP {0}")]
    HttpStatus(StatusCode),
    #[error("statistics response is malformed: {0}")]
    MalformedResponse(String),
}

/// Client for `GET <base>/api/parking-stats`. Knows nothing about rendering.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session_cookie: None,
        }
    }

    /// Attach the session cookie of an authenticated login, e.g.
    /// `"session=eyJf..."`. Without it the endpoint will answer 401/302.
    #[must_use]
    pub fn with_session(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode one statistics payload.
    ///
    /// # Errors
    ///
    /// `StatsError::Network` if the request never completed,
    /// `StatsError::HttpStatus` on a non-2xx answer, and
    /// `StatsError::MalformedResponse` if the body is not a valid payload.
    pub async fn fetch_statistics(&self) -> Result<StatisticsPayload, StatsError> {
        let url = format!("{}/api/parking-stats", self.base_url);

        let mut request = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(ref cookie) = self.session_cookie {
            request = request.header(header::COOKIE, cookie.clone());
        }

        let response = request.send().await.map_err(StatsError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::HttpStatus(status));
        }

        response
            .json::<StatisticsPayload>()
            .await
            .map_err(|e| StatsError::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_and_decodes_statistics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "overview": {"available_spots": 5, "occupied_spots": 2},
                "lots": [],
                "success": true
            })))
            .mount(&server)
            .await;

        let client = StatsClient::new(server.uri());
        let payload = client.fetch_statistics().await.unwrap();
        assert_eq!(payload.overview.unwrap().available_spots, 5);
        assert_eq!(payload.success, Some(true));
    }

    #[tokio::test]
    async fn sends_session_cookie_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .and(header("cookie", "session=abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = StatsClient::new(server.uri()).with_session("session=abc123");
        client.fetch_statistics().await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_an_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = StatsClient::new(server.uri());
        match client.fetch_statistics().await {
            Err(StatsError::HttpStatus(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_is_a_malformed_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/parking-stats"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
            .mount(&server)
            .await;

        let client = StatsClient::new(server.uri());
        assert!(matches!(
            client.fetch_statistics().await,
            Err(StatsError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        // Port 9 (discard) is assumed closed on test hosts.
        let client = StatsClient::new("http://127.0.0.1:9");
        assert!(matches!(
            client.fetch_statistics().await,
            Err(StatsError::Network(_))
        ));
    }
}
