// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, content API client and fallbacks, start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{
    start_cleanup_task, ContentApiClient, ContentCache, ContentService, FallbackCatalog,
    FormRateLimiter,
};
use std::io;
use std::path::Path;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    let config_error = config.validate().err();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.clone()
        } else {
            "info,actix_web=info".to_string()
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Some(e) = config_error {
        log::error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    log::info!("Starting content gateway...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Static fallback content
    let fallback = match FallbackCatalog::load(config.fallback_path.as_deref().map(Path::new)) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log::error!("Failed to load fallback content: {:#}", e);
            std::process::exit(1);
        }
    };

    // 5. Content API client
    let http_client = match config::init_http_client(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build content API client: {}", e);
            std::process::exit(1);
        }
    };
    let client = ContentApiClient::new(http_client, &config.content_api_url);
    log::info!("Content API: {}", client.base_url());

    // 6. Cache and form limiter, pruned by one background task
    let cache = Arc::new(ContentCache::new(config.cache_ttl_secs));
    log::info!(
        "Initialized content cache (TTL: {}s)",
        config.cache_ttl_secs
    );

    let limiter = Arc::new(FormRateLimiter::new(config.form_rate_limit_per_minute));
    log::info!(
        "Form rate limit: {}/min per client (trust forwarded headers: {})",
        config.form_rate_limit_per_minute,
        config.trust_forwarded_for
    );

    start_cleanup_task(
        cache.clone(),
        limiter.clone(),
        config.cache_cleanup_interval_secs,
    );
    log::info!(
        "Started cleanup task (interval: {}s)",
        config.cache_cleanup_interval_secs
    );

    let service = web::Data::new(ContentService::new(client, cache, fallback));
    let limiter = web::Data::from(limiter);

    // 7. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            // Application state (config, content service and form limiter)
            .app_data(config_data.clone())
            .app_data(service.clone())
            .app_data(limiter.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes; forms before the /api content scope
            .configure(handlers::health_config)
            .configure(handlers::forms_config)
            .configure(handlers::content_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
