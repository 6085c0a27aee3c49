// src/services/fallback.rs
// DOCUMENTATION: Static default content
// PURPOSE: What the site shows when the content API cannot be reached

use crate::models::{
    find_by_slug, AboutContent, ContactDetails, Destination, Excursion, HomeContent, Review,
    ServiceOffering, Tour, TourCategory, TourPackage,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/fallback.json");

/// One default per page and collection
/// DOCUMENTATION: Same shapes the content API returns, already unwrapped
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FallbackCatalog {
    pub home: HomeContent,
    pub tours: Vec<TourCategory>,
    pub packages: Vec<TourPackage>,
    pub excursions: Vec<Excursion>,
    pub destinations: Vec<Destination>,
    pub reviews: Vec<Review>,
    pub services: Vec<ServiceOffering>,
    pub about: AboutContent,
    pub contact: ContactDetails,
}

impl FallbackCatalog {
    /// Parse the catalog embedded at build time
    pub fn embedded() -> Result<Self> {
        serde_json::from_str(EMBEDDED_CATALOG).context("embedded fallback catalog is malformed")
    }

    /// Load the catalog, preferring an operator-supplied file
    /// DOCUMENTATION: A missing file is a warning and the embedded catalog is
    /// used; a file that exists but does not parse is an error
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::embedded();
        };

        if !path.exists() {
            log::warn!(
                "Fallback file {} not found, using embedded defaults",
                path.display()
            );
            return Self::embedded();
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fallback file {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing fallback file {}", path.display()))?;

        log::info!(
            "Loaded fallback catalog from {} ({} tour categories, {} packages, {} excursions)",
            path.display(),
            catalog.tours.len(),
            catalog.packages.len(),
            catalog.excursions.len()
        );
        Ok(catalog)
    }

    /// Find a tour in any category
    pub fn find_tour(&self, slug: &str) -> Option<&Tour> {
        self.tours
            .iter()
            .find_map(|category| category.find_tour(slug))
            .or_else(|| find_by_slug(&self.home.featured_tours, slug))
    }

    pub fn find_package(&self, slug: &str) -> Option<&TourPackage> {
        find_by_slug(&self.packages, slug)
    }

    pub fn find_excursion(&self, slug: &str) -> Option<&Excursion> {
        find_by_slug(&self.excursions, slug)
    }

    pub fn find_destination(&self, slug: &str) -> Option<&Destination> {
        find_by_slug(&self.destinations, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = FallbackCatalog::embedded().unwrap();

        assert!(!catalog.home.hero.title.is_empty());
        assert!(!catalog.tours.is_empty());
        assert!(!catalog.packages.is_empty());
        assert!(!catalog.excursions.is_empty());
        assert!(!catalog.services.is_empty());
        assert!(catalog.contact.email.is_some());
        assert!(catalog.reviews.iter().all(Review::is_displayable));
    }

    #[test]
    fn test_slug_lookups() {
        let catalog = FallbackCatalog::embedded().unwrap();

        let tour = catalog.find_tour("wild-sri-lanka").unwrap();
        assert_eq!(tour.category.as_deref(), Some("wildlife"));

        assert!(catalog.find_excursion("galle-fort-walk").is_some());
        assert!(catalog.find_package("honeymoon-escape").is_some());
        assert!(catalog.find_destination("ella").is_some());
        assert!(catalog.find_excursion("maldives-day-trip").is_none());
    }

    #[test]
    fn test_missing_override_uses_embedded() {
        let catalog = FallbackCatalog::load(Some(Path::new("/nonexistent/fallback.json"))).unwrap();
        assert!(!catalog.tours.is_empty());
    }

    #[test]
    fn test_override_file() {
        let path = std::env::temp_dir().join(format!("fallback-{}.json", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "about": {{ "title": "Our Story" }} }}"#).unwrap();

        let catalog = FallbackCatalog::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog.about.title, "Our Story");
        assert!(catalog.tours.is_empty());
    }

    #[test]
    fn test_malformed_override_is_error() {
        let path = std::env::temp_dir().join(format!("fallback-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, "{ not json").unwrap();

        let result = FallbackCatalog::load(Some(path.as_path()));
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("parsing fallback file"));
    }
}
