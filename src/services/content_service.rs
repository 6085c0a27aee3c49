// src/services/content_service.rs
// DOCUMENTATION: Business logic for site content
// PURPOSE: Cache → content API → static fallback, once for every page

use crate::errors::SiteError;
use crate::models::{
    is_valid_slug, AboutContent, ContactDetails, ContactMessage, ContentResponse, ContentSource,
    Destination, Excursion, HomeContent, ListQuery, PagedResponse, Review, ReviewSubmission,
    ServiceOffering, SubmissionReceipt, Tour, TourCategory, TourPackage,
};
use crate::services::content_client::paths;
use crate::services::envelope::{unwrap_item, unwrap_list};
use crate::services::{ContentApiClient, ContentCache, FallbackCatalog};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// How the payload is wrapped upstream
#[derive(Debug, Clone, Copy)]
enum Shape {
    /// List under `data` or one of these keys, or a bare array
    List(&'static [&'static str]),
    /// Object under `data` or one of these keys, or the object itself
    Item(&'static [&'static str]),
}

impl Shape {
    fn unwrap(self, value: Value) -> Result<Value, SiteError> {
        match self {
            Shape::List(keys) => unwrap_list(value, keys),
            Shape::Item(keys) => unwrap_item(value, keys),
        }
    }
}

pub struct ContentService {
    client: ContentApiClient,
    cache: Arc<ContentCache>,
    fallback: Arc<FallbackCatalog>,
}

impl ContentService {
    pub fn new(
        client: ContentApiClient,
        cache: Arc<ContentCache>,
        fallback: Arc<FallbackCatalog>,
    ) -> Self {
        Self {
            client,
            cache,
            fallback,
        }
    }

    pub fn cache(&self) -> &Arc<ContentCache> {
        &self.cache
    }

    #[cfg(test)]
    pub fn fallback(&self) -> &FallbackCatalog {
        &self.fallback
    }

    /// Fetch, unwrap and decode one upstream document
    /// DOCUMENTATION: Only payloads that decode into `T` are cached
    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        shape: Shape,
    ) -> Result<(T, ContentSource), SiteError> {
        let key = ContentCache::generate_key(path);

        if let Some(cached) = self.cache.get(&key).await {
            if let Ok(data) = serde_json::from_value(cached) {
                return Ok((data, ContentSource::Cache));
            }
        }

        let raw = self.client.get_json(path).await?;
        let payload = shape.unwrap(raw)?;
        let data = serde_json::from_value(payload.clone())
            .map_err(|e| SiteError::Decode(format!("{}: {}", path, e)))?;

        self.cache.set(key, payload).await;
        Ok((data, ContentSource::Live))
    }

    /// Fetch a page, serving the static default on any failure
    async fn load<T: DeserializeOwned>(
        &self,
        path: &str,
        shape: Shape,
        fallback: impl FnOnce(&FallbackCatalog) -> T,
    ) -> ContentResponse<T> {
        match self.fetch(path, shape).await {
            Ok((data, source)) => ContentResponse::new(data, source),
            Err(e) => {
                log::warn!("Serving fallback content for {}: {}", path, e);
                ContentResponse::new(fallback(&self.fallback), ContentSource::Fallback)
            }
        }
    }

    /// Fetch a slugged item, searching the static defaults on failure
    async fn load_by_slug<T: DeserializeOwned>(
        &self,
        collection: &str,
        slug: &str,
        keys: &'static [&'static str],
        fallback: impl FnOnce(&FallbackCatalog) -> Option<T>,
    ) -> Result<ContentResponse<T>, SiteError> {
        if !is_valid_slug(slug) {
            return Err(SiteError::InvalidInput(format!("invalid slug '{}'", slug)));
        }

        let path = paths::by_slug(collection, slug);
        match self.fetch(&path, Shape::Item(keys)).await {
            Ok((data, source)) => Ok(ContentResponse::new(data, source)),
            Err(e) => {
                log::warn!("Looking up {} in fallback content: {}", path, e);
                fallback(&self.fallback)
                    .map(|data| ContentResponse::new(data, ContentSource::Fallback))
                    .ok_or_else(|| SiteError::NotFound(format!("{}/{}", collection, slug)))
            }
        }
    }

    pub async fn home(&self) -> ContentResponse<HomeContent> {
        self.load(paths::HOME, Shape::Item(&["home"]), |f| f.home.clone())
            .await
    }

    pub async fn tour_categories(&self, query: &ListQuery) -> PagedResponse<TourCategory> {
        let response = self
            .load(paths::TOURS, Shape::List(&["tours", "categories"]), |f| {
                f.tours.clone()
            })
            .await;
        PagedResponse::from_list(response.data, query, response.source)
    }

    pub async fn tour(&self, slug: &str) -> Result<ContentResponse<Tour>, SiteError> {
        self.load_by_slug(paths::TOURS, slug, &["tour"], |f| f.find_tour(slug).cloned())
            .await
    }

    pub async fn packages(&self, query: &ListQuery) -> PagedResponse<TourPackage> {
        let response = self
            .load(paths::PACKAGES, Shape::List(&["packages"]), |f| {
                f.packages.clone()
            })
            .await;
        PagedResponse::from_list(response.data, query, response.source)
    }

    pub async fn package(&self, slug: &str) -> Result<ContentResponse<TourPackage>, SiteError> {
        self.load_by_slug(paths::PACKAGES, slug, &["package"], |f| {
            f.find_package(slug).cloned()
        })
        .await
    }

    pub async fn excursions(&self, query: &ListQuery) -> PagedResponse<Excursion> {
        let response = self
            .load(paths::EXCURSIONS, Shape::List(&["excursions"]), |f| {
                f.excursions.clone()
            })
            .await;
        PagedResponse::from_list(response.data, query, response.source)
    }

    pub async fn excursion(&self, slug: &str) -> Result<ContentResponse<Excursion>, SiteError> {
        self.load_by_slug(paths::EXCURSIONS, slug, &["excursion"], |f| {
            f.find_excursion(slug).cloned()
        })
        .await
    }

    pub async fn destinations(&self, query: &ListQuery) -> PagedResponse<Destination> {
        let response = self
            .load(paths::DESTINATIONS, Shape::List(&["destinations"]), |f| {
                f.destinations.clone()
            })
            .await;
        PagedResponse::from_list(response.data, query, response.source)
    }

    pub async fn destination(&self, slug: &str) -> Result<ContentResponse<Destination>, SiteError> {
        self.load_by_slug(paths::DESTINATIONS, slug, &["destination"], |f| {
            f.find_destination(slug).cloned()
        })
        .await
    }

    /// Reviews fit for display, in upstream order
    pub async fn reviews(&self, query: &ListQuery) -> PagedResponse<Review> {
        let response = self
            .load(paths::REVIEWS, Shape::List(&["reviews"]), |f| {
                f.reviews.clone()
            })
            .await;
        let reviews: Vec<Review> = response
            .data
            .into_iter()
            .filter(Review::is_displayable)
            .collect();
        PagedResponse::from_list(reviews, query, response.source)
    }

    pub async fn services(&self) -> ContentResponse<Vec<ServiceOffering>> {
        self.load(paths::SERVICES, Shape::List(&["services"]), |f| {
            f.services.clone()
        })
        .await
    }

    pub async fn about(&self) -> ContentResponse<AboutContent> {
        self.load(paths::ABOUT, Shape::Item(&["about"]), |f| f.about.clone())
            .await
    }

    pub async fn contact(&self) -> ContentResponse<ContactDetails> {
        self.load(paths::CONTACT, Shape::Item(&["contact"]), |f| {
            f.contact.clone()
        })
        .await
    }

    /// Forward a contact form message
    /// DOCUMENTATION: No fallback; the caller learns when delivery failed
    pub async fn submit_message(
        &self,
        message: &ContactMessage,
    ) -> Result<SubmissionReceipt, SiteError> {
        let reference = Uuid::new_v4();
        log::info!("Forwarding contact message {}", reference);

        self.client
            .post_json(paths::MESSAGE, message)
            .await
            .map_err(|e| {
                log::error!("Contact message {} was not delivered: {}", reference, e);
                e
            })?;

        log::info!("Contact message {} delivered", reference);
        Ok(SubmissionReceipt::accepted(
            reference,
            "Thank you for your message. Our team will reply within one working day.",
        ))
    }

    /// Forward a review for moderation
    pub async fn submit_review(
        &self,
        review: &ReviewSubmission,
    ) -> Result<SubmissionReceipt, SiteError> {
        let reference = Uuid::new_v4();
        log::info!(
            "Forwarding review {} (rating {}, tour {})",
            reference,
            review.rating,
            review.tour.as_deref().unwrap_or("-")
        );

        self.client
            .post_json(paths::REVIEW_SUBMIT, review)
            .await
            .map_err(|e| {
                log::error!("Review {} was not delivered: {}", reference, e);
                e
            })?;

        // Review lists change once moderated; drop the cached copy
        self.cache.remove(&ContentCache::generate_key(paths::REVIEWS)).await;

        Ok(SubmissionReceipt::accepted(
            reference,
            "Thank you for your review. It will appear once approved.",
        ))
    }
}
