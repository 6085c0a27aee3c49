// src/handlers/health.rs
// DOCUMENTATION: Health check handler
// PURPOSE: Simple endpoint to verify service status

use crate::services::ContentService;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub async fn health_check(service: web::Data<ContentService>) -> impl Responder {
    let cache = service.cache().stats().await;

    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "cached_entries": cache.active_entries
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
