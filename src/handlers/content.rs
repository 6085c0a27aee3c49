// src/handlers/content.rs
// DOCUMENTATION: HTTP handlers for site content
// PURPOSE: Read routes; every one answers, with fallback content if need be

use crate::errors::SiteError;
use crate::models::ListQuery;
use crate::services::ContentService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/home
pub async fn get_home(service: web::Data<ContentService>) -> impl Responder {
    HttpResponse::Ok().json(service.home().await)
}

/// GET /api/tours
/// Tour categories with their tours
pub async fn list_tours(
    service: web::Data<ContentService>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(service.tour_categories(&query).await)
}

/// GET /api/tours/{slug}
pub async fn get_tour(
    service: web::Data<ContentService>,
    path: web::Path<String>,
) -> Result<impl Responder, SiteError> {
    let tour = service.tour(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(tour))
}

/// GET /api/packages
pub async fn list_packages(
    service: web::Data<ContentService>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(service.packages(&query).await)
}

/// GET /api/packages/{slug}
pub async fn get_package(
    service: web::Data<ContentService>,
    path: web::Path<String>,
) -> Result<impl Responder, SiteError> {
    let package = service.package(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(package))
}

/// GET /api/excursions
pub async fn list_excursions(
    service: web::Data<ContentService>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(service.excursions(&query).await)
}

/// GET /api/excursions/{slug}
pub async fn get_excursion(
    service: web::Data<ContentService>,
    path: web::Path<String>,
) -> Result<impl Responder, SiteError> {
    let excursion = service.excursion(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(excursion))
}

/// GET /api/destinations
pub async fn list_destinations(
    service: web::Data<ContentService>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(service.destinations(&query).await)
}

/// GET /api/destinations/{slug}
pub async fn get_destination(
    service: web::Data<ContentService>,
    path: web::Path<String>,
) -> Result<impl Responder, SiteError> {
    let destination = service.destination(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(destination))
}

/// GET /api/reviews
pub async fn list_reviews(
    service: web::Data<ContentService>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(service.reviews(&query).await)
}

/// GET /api/services
pub async fn get_services(service: web::Data<ContentService>) -> impl Responder {
    HttpResponse::Ok().json(service.services().await)
}

/// GET /api/about
pub async fn get_about(service: web::Data<ContentService>) -> impl Responder {
    HttpResponse::Ok().json(service.about().await)
}

/// GET /api/contact
pub async fn get_contact(service: web::Data<ContentService>) -> impl Responder {
    HttpResponse::Ok().json(service.contact().await)
}

/// Configuration for content routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(super::query_config())
            .route("/home", web::get().to(get_home))
            .route("/tours", web::get().to(list_tours))
            .route("/tours/{slug}", web::get().to(get_tour))
            .route("/packages", web::get().to(list_packages))
            .route("/packages/{slug}", web::get().to(get_package))
            .route("/excursions", web::get().to(list_excursions))
            .route("/excursions/{slug}", web::get().to(get_excursion))
            .route("/destinations", web::get().to(list_destinations))
            .route("/destinations/{slug}", web::get().to(get_destination))
            .route("/reviews", web::get().to(list_reviews))
            .route("/services", web::get().to(get_services))
            .route("/about", web::get().to(get_about))
            .route("/contact", web::get().to(get_contact)),
    );
}
