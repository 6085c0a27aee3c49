// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the content gateway

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure the gateway can report
/// Upstream variants are usually swallowed by the fallback policy and only
/// reach the client on form submissions
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Content API returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Content API returned non-JSON content type: {0}")]
    UnexpectedContentType(String),

    #[error("Failed to decode content API response: {0}")]
    Decode(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl SiteError {
    fn code(&self) -> &'static str {
        match self {
            SiteError::NotFound(_) => "NOT_FOUND",
            SiteError::InvalidInput(_) => "INVALID_INPUT",
            SiteError::ValidationError(_) => "VALIDATION_ERROR",
            SiteError::Unauthorized => "UNAUTHORIZED",
            SiteError::Forbidden => "FORBIDDEN",
            SiteError::ExternalApiError(_) => "EXTERNAL_API_ERROR",
            SiteError::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            SiteError::UnexpectedContentType(_) => "UNEXPECTED_CONTENT_TYPE",
            SiteError::Decode(_) => "DECODE_ERROR",
            SiteError::UnexpectedShape(_) => "UNEXPECTED_SHAPE",
            SiteError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
        }
    }
}

/// Convert SiteError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for SiteError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SiteError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SiteError::Unauthorized => StatusCode::UNAUTHORIZED,
            SiteError::Forbidden => StatusCode::FORBIDDEN,
            SiteError::ExternalApiError(_)
            | SiteError::UpstreamStatus { .. }
            | SiteError::UnexpectedContentType(_)
            | SiteError::Decode(_)
            | SiteError::UnexpectedShape(_) => StatusCode::BAD_GATEWAY,
            SiteError::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl From<validator::ValidationErrors> for SiteError {
    fn from(errors: validator::ValidationErrors) -> Self {
        SiteError::ValidationError(errors.to_string())
    }
}
