// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for cache operations
// PURPOSE: Let operators inspect and flush cached content after publishing

use crate::config::Config;
use crate::errors::SiteError;
use crate::services::ContentService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde_json::json;

/// GET /admin/cache/stats
/// Cache entry counts
pub async fn cache_stats(
    service: web::Data<ContentService>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, SiteError> {
    verify_admin_token(&req, &config)?;

    let stats = service.cache().stats().await;
    Ok(HttpResponse::Ok().json(stats))
}

/// POST /admin/cache/clear
/// Drop every cached page so the next request goes to the content API
///
/// DOCUMENTATION: Requires admin authentication via X-Admin-Token header
pub async fn clear_cache(
    service: web::Data<ContentService>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, SiteError> {
    verify_admin_token(&req, &config)?;

    let removed = service.cache().clear().await;
    log::info!("Admin cache clear: {} entries removed", removed);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Cache cleared",
        "entries_removed": removed
    })))
}

/// Verify admin token from request headers
fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), SiteError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            SiteError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(SiteError::Forbidden);
    }

    Ok(())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/cache/stats", web::get().to(cache_stats))
            .route("/cache/clear", web::post().to(clear_cache)),
    );
}
