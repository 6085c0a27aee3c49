// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external content API (e.g., "https://cms.example.lk")
    pub content_api_url: String,

    /// Optional bearer token sent to the content API
    pub content_api_token: Option<String>,

    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8080)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Admin authentication token (for cache endpoints)
    pub admin_token: String,

    /// Timeout for content API requests in seconds
    pub request_timeout_secs: u64,

    /// Time-to-live for cached content in seconds
    pub cache_ttl_secs: u64,

    /// Interval between cache cleanup runs in seconds
    pub cache_cleanup_interval_secs: u64,

    /// Optional JSON file overriding the embedded fallback content
    pub fallback_path: Option<String>,

    /// Form submissions allowed per client IP per minute
    pub form_rate_limit_per_minute: u32,

    /// Take the client IP from Forwarded / X-Forwarded-For
    /// Only enable behind a reverse proxy that overwrites those headers
    pub trust_forwarded_for: bool,
}

fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            content_api_url: env::var("CONTENT_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),

            content_api_token: optional_var("CONTENT_API_TOKEN"),

            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: var_or("SERVER_PORT", 8080),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "admin-token-dev".to_string()),

            request_timeout_secs: var_or("REQUEST_TIMEOUT_SECS", 10),

            cache_ttl_secs: var_or("CACHE_TTL_SECS", 300),

            cache_cleanup_interval_secs: var_or("CACHE_CLEANUP_INTERVAL_SECS", 60),

            fallback_path: optional_var("FALLBACK_PATH"),

            form_rate_limit_per_minute: var_or("FORM_RATE_LIMIT_PER_MINUTE", 5),

            trust_forwarded_for: var_or("TRUST_FORWARDED_FOR", false),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.content_api_url.is_empty() {
            return Err("CONTENT_API_URL is required".to_string());
        }

        if !self.content_api_url.starts_with("http://")
            && !self.content_api_url.starts_with("https://")
        {
            return Err(format!(
                "CONTENT_API_URL must be an http(s) URL, got '{}'",
                self.content_api_url
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err("REQUEST_TIMEOUT_SECS must be at least 1".to_string());
        }

        if self.form_rate_limit_per_minute == 0 {
            return Err("FORM_RATE_LIMIT_PER_MINUTE must be at least 1".to_string());
        }

        if self.admin_token == "admin-token-dev" && self.environment == "production" {
            log::warn!("ADMIN_TOKEN is the development default in production");
        }

        Ok(())
    }
}

#[cfg(test)]
impl Config {
    /// Configuration pointing at a test content API
    pub fn for_tests(content_api_url: &str) -> Self {
        Config {
            content_api_url: content_api_url.to_string(),
            content_api_token: None,
            server_address: "127.0.0.1".to_string(),
            server_port: 0,
            environment: "test".to_string(),
            log_level: "debug".to_string(),
            admin_token: "test-admin".to_string(),
            request_timeout_secs: 2,
            cache_ttl_secs: 60,
            cache_cleanup_interval_secs: 60,
            fallback_path: None,
            form_rate_limit_per_minute: 5,
            trust_forwarded_for: false,
        }
    }
}
