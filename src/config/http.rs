// src/config/http.rs
// DOCUMENTATION: HTTP client initialization
// PURPOSE: Build the shared reqwest client used for the content API

use crate::config::Config;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;

/// Initialize the content API HTTP client
/// DOCUMENTATION: Creates the client with user agent, timeout and auth headers
/// Called once during application startup in main.rs
/// The client pools connections internally and is cheap to clone
pub fn init_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    log::info!("Initializing content API client: {}", config.content_api_url);

    let user_agent = format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = &config.content_api_token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => log::warn!("CONTENT_API_TOKEN is not a valid header value: {}", e),
        }
    }

    let client = Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        // Whole-request timeout, no retries on expiry
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.request_timeout_secs.min(5)))
        .build()?;

    log::info!("Content API client initialized successfully");
    Ok(client)
}
