// src/services/content_client.rs
// DOCUMENTATION: Content API client
// PURPOSE: Typed fetch wrappers over the external content API

use crate::errors::SiteError;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::Value;

/// Upstream paths consumed by the gateway
pub mod paths {
    pub const HOME: &str = "/api/home";
    pub const TOURS: &str = "/api/tours";
    pub const PACKAGES: &str = "/api/packages";
    pub const EXCURSIONS: &str = "/api/excursion";
    pub const DESTINATIONS: &str = "/api/destinations";
    pub const REVIEWS: &str = "/api/reviews";
    pub const REVIEW_SUBMIT: &str = "/api/reviews/submit";
    pub const SERVICES: &str = "/api/services";
    pub const ABOUT: &str = "/api/about";
    pub const CONTACT: &str = "/api/contact";
    pub const MESSAGE: &str = "/api/message";

    /// Detail path for a slugged collection (e.g., "/api/excursion/slug/galle-fort")
    pub fn by_slug(collection: &str, slug: &str) -> String {
        format!("{}/slug/{}", collection, slug)
    }
}

/// Longest upstream error body kept in error messages
const MAX_ERROR_BODY: usize = 300;

/// Content API client
/// DOCUMENTATION: One shared instance; reqwest pools connections
#[derive(Clone)]
pub struct ContentApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL without trailing slash (e.g., "https://cms.example.lk")
    base_url: String,
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

impl ContentApiClient {
    /// Create new content API client
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON document
    /// DOCUMENTATION: Fails on transport errors, non-2xx status, a non-JSON
    /// content type or a body that does not parse
    pub async fn get_json(&self, path: &str) -> Result<Value, SiteError> {
        let url = self.url(path);
        log::debug!("Content API GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            log::error!("Content API request failed: {}", e);
            SiteError::ExternalApiError(format!("Request to {} failed: {}", path, e))
        })?;

        let response = Self::check_status(path, response).await?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_json_content_type(&content_type) {
            log::error!(
                "Content API {} answered with content type '{}'",
                path,
                content_type
            );
            return Err(SiteError::UnexpectedContentType(if content_type.is_empty() {
                "<missing>".to_string()
            } else {
                content_type
            }));
        }

        let bytes = response.bytes().await.map_err(|e| {
            SiteError::ExternalApiError(format!("Reading body of {} failed: {}", path, e))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            log::error!("Failed to parse content API response for {}: {}", path, e);
            SiteError::Decode(format!("{}: {}", path, e))
        })
    }

    /// POST a JSON body
    /// DOCUMENTATION: A 2xx answer is success; its JSON body is returned when
    /// there is one, otherwise `Value::Null`
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, SiteError> {
        let url = self.url(path);
        log::debug!("Content API POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                log::error!("Content API request failed: {}", e);
                SiteError::ExternalApiError(format!("Request to {} failed: {}", path, e))
            })?;

        let response = Self::check_status(path, response).await?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        let bytes = response.bytes().await.map_err(|e| {
            SiteError::ExternalApiError(format!("Reading body of {} failed: {}", path, e))
        })?;

        if !is_json || bytes.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    async fn check_status(path: &str, response: Response) -> Result<Response, SiteError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::error!("Content API error {} on {}: {}", status, path, truncate(&body));
        Err(SiteError::UpstreamStatus {
            status: status.as_u16(),
            body: truncate(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn client_for(server: &MockServer) -> ContentApiClient {
        ContentApiClient::new(Client::new(), &server.base_url())
    }

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("application/hal+json"));
        assert!(!is_json_content_type("text/html; charset=utf-8"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let body = "ශ්‍රී ".repeat(200);
        let short = truncate(&body);
        assert!(short.ends_with("..."));
        assert!(short.len() <= MAX_ERROR_BODY + 3);
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ContentApiClient::new(Client::new(), "https://cms.example.lk/");
        assert_eq!(client.url(paths::HOME), "https://cms.example.lk/api/home");
        assert_eq!(
            paths::by_slug(paths::EXCURSIONS, "galle-fort"),
            "/api/excursion/slug/galle-fort"
        );
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/tours");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "tours": [{ "title": "Yala Safari" }] }));
            })
            .await;

        let value = assert_ok!(client_for(&server).get_json(paths::TOURS).await);

        mock.assert_async().await;
        assert_eq!(value["tours"][0]["title"], "Yala Safari");
    }

    #[tokio::test]
    async fn test_get_json_non_ok_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/home");
                then.status(503).body("maintenance");
            })
            .await;

        let err = assert_err!(client_for(&server).get_json(paths::HOME).await);
        match err {
            SiteError::UpstreamStatus { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_rejects_html() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/about");
                then.status(200)
                    .header("Content-Type", "text/html; charset=utf-8")
                    .body("<!doctype html><html></html>");
            })
            .await;

        let err = assert_err!(client_for(&server).get_json(paths::ABOUT).await);
        assert!(matches!(err, SiteError::UnexpectedContentType(ref ct) if ct.starts_with("text/html")));
    }

    #[tokio::test]
    async fn test_get_json_malformed_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/contact");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .body("this isn't actually json");
            })
            .await;

        let err = assert_err!(client_for(&server).get_json(paths::CONTACT).await);
        assert!(matches!(err, SiteError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_json_unreachable() {
        let client = ContentApiClient::new(Client::new(), "http://127.0.0.1:1");
        let err = assert_err!(client.get_json(paths::HOME).await);
        assert!(matches!(err, SiteError::ExternalApiError(_)));
    }

    #[tokio::test]
    async fn test_post_json_sends_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/message")
                    .json_body(json!({ "name": "Nimal", "message": "Hello" }));
                then.status(201)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "success": true }));
            })
            .await;

        let body = json!({ "name": "Nimal", "message": "Hello" });
        let value = assert_ok!(client_for(&server).post_json(paths::MESSAGE, &body).await);

        mock.assert_async().await;
        assert_eq!(value["success"], true);
    }

    #[tokio::test]
    async fn test_post_json_empty_success_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/reviews/submit");
                then.status(204);
            })
            .await;

        let value = assert_ok!(
            client_for(&server)
                .post_json(paths::REVIEW_SUBMIT, &json!({}))
                .await
        );
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_post_json_upstream_rejects() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/message");
                then.status(422)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "error": "spam" }));
            })
            .await;

        let err = assert_err!(
            client_for(&server)
                .post_json(paths::MESSAGE, &json!({}))
                .await
        );
        assert!(matches!(err, SiteError::UpstreamStatus { status: 422, .. }));
    }
}
