// src/handlers/forms.rs
// DOCUMENTATION: HTTP handlers for the contact and review forms
// PURPOSE: Rate limit, validate, then forward to the content API

use crate::config::Config;
use crate::errors::SiteError;
use crate::models::{ContactMessage, ReviewSubmission};
use crate::services::{ContentService, FormRateLimiter};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use validator::Validate;

/// Client key for rate limiting
/// DOCUMENTATION: The socket peer IP. Forwarded headers are client-controlled,
/// so they are only read when the gateway sits behind a trusted proxy
fn client_key(req: &HttpRequest, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        if let Some(ip) = req.connection_info().realip_remote_addr() {
            return ip.to_string();
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// POST /api/message
/// Forward a contact form enquiry
pub async fn submit_message(
    config: web::Data<Config>,
    service: web::Data<ContentService>,
    limiter: web::Data<FormRateLimiter>,
    req: HttpRequest,
    body: web::Json<ContactMessage>,
) -> Result<impl Responder, SiteError> {
    limiter.check(&client_key(&req, config.trust_forwarded_for))?;
    body.validate()?;

    let receipt = service.submit_message(&body).await?;
    Ok(HttpResponse::Accepted().json(receipt))
}

/// POST /api/reviews/submit
/// Forward a guest review for moderation
pub async fn submit_review(
    config: web::Data<Config>,
    service: web::Data<ContentService>,
    limiter: web::Data<FormRateLimiter>,
    req: HttpRequest,
    body: web::Json<ReviewSubmission>,
) -> Result<impl Responder, SiteError> {
    limiter.check(&client_key(&req, config.trust_forwarded_for))?;
    body.validate()?;

    let receipt = service.submit_review(&body).await?;
    Ok(HttpResponse::Accepted().json(receipt))
}

/// Configuration for form routes
/// DOCUMENTATION: Registered before the content scope so /api/reviews/submit
/// is not shadowed
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/message")
            .app_data(super::json_config())
            .route(web::post().to(submit_message)),
    )
    .service(
        web::resource("/api/reviews/submit")
            .app_data(super::json_config())
            .route(web::post().to(submit_review)),
    );
}
