// src/handlers/test_support.rs
// DOCUMENTATION: Shared application state for handler tests

use crate::config::Config;
use crate::services::{ContentApiClient, ContentCache, ContentService, FallbackCatalog, FormRateLimiter};
use actix_web::web;
use reqwest::Client;
use std::sync::Arc;

/// Config, content service and form limiter pointed at `content_api_url`
pub fn test_app_data(
    content_api_url: &str,
) -> (
    web::Data<Config>,
    web::Data<ContentService>,
    web::Data<FormRateLimiter>,
) {
    let config = Config::for_tests(content_api_url);
    let service = ContentService::new(
        ContentApiClient::new(Client::new(), content_api_url),
        Arc::new(ContentCache::new(config.cache_ttl_secs)),
        Arc::new(FallbackCatalog::embedded().expect("embedded fallback catalog")),
    );
    let limiter = FormRateLimiter::new(config.form_rate_limit_per_minute);

    (
        web::Data::new(config),
        web::Data::new(service),
        web::Data::new(limiter),
    )
}
