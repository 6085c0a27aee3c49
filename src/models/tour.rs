// src/models/tour.rs
// DOCUMENTATION: Tour, tour category and package shapes
// PURPOSE: Data transfer objects for the sellable travel products

use serde::{Deserialize, Serialize};

use super::common::{lenient_f64, Slugged};

/// One day of a tour or package itinerary
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDay {
    pub day: Option<u32>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Overnight stop (e.g., "Kandy")
    pub overnight: Option<String>,
}

/// A tour as returned by the content API
/// DOCUMENTATION: Every field is optional on the wire; unknown fields are ignored
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Tour {
    #[serde(alias = "_id")]
    pub id: Option<String>,

    pub slug: Option<String>,

    pub title: String,

    pub summary: Option<String>,

    pub description: Option<String>,

    /// Category slug or title (e.g., "wildlife")
    pub category: Option<String>,

    /// Free-form duration (e.g., "7 Days / 6 Nights")
    pub duration: Option<String>,

    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,

    pub currency: Option<String>,

    #[serde(alias = "coverImage")]
    pub image: Option<String>,

    pub gallery: Vec<String>,

    pub highlights: Vec<String>,

    pub itinerary: Vec<ItineraryDay>,
}

/// Group of tours shown together on the tours page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TourCategory {
    #[serde(alias = "_id")]
    pub id: Option<String>,

    pub slug: Option<String>,

    pub title: String,

    pub description: Option<String>,

    pub image: Option<String>,

    pub tours: Vec<Tour>,
}

/// Multi-day package with inclusions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TourPackage {
    #[serde(alias = "_id")]
    pub id: Option<String>,

    pub slug: Option<String>,

    pub title: String,

    pub description: Option<String>,

    pub duration: Option<String>,

    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,

    pub currency: Option<String>,

    pub image: Option<String>,

    pub inclusions: Vec<String>,

    pub exclusions: Vec<String>,

    pub itinerary: Vec<ItineraryDay>,
}

impl Slugged for Tour {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl Slugged for TourCategory {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl Slugged for TourPackage {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl TourCategory {
    /// Find a tour inside this category by slug
    pub fn find_tour(&self, slug: &str) -> Option<&Tour> {
        super::common::find_by_slug(&self.tours, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tour_accepts_mongo_id_and_cover_image() {
        let tour: Tour = serde_json::from_value(json!({
            "_id": "65f0c1",
            "slug": "hill-country-escape",
            "title": "Hill Country Escape",
            "coverImage": "https://cdn.example.lk/ella.jpg",
            "price": "USD 890",
            "itinerary": [{ "day": 1, "title": "Colombo to Kandy", "overnight": "Kandy" }],
            "seo": { "ignored": true }
        }))
        .unwrap();

        assert_eq!(tour.id.as_deref(), Some("65f0c1"));
        assert_eq!(tour.title, "Hill Country Escape");
        assert_eq!(tour.image.as_deref(), Some("https://cdn.example.lk/ella.jpg"));
        assert_eq!(tour.price, Some(890.0));
        assert_eq!(tour.itinerary[0].overnight.as_deref(), Some("Kandy"));
        assert!(tour.gallery.is_empty());
    }

    #[test]
    fn test_category_find_tour_ignores_case() {
        let category = TourCategory {
            title: "Wildlife".to_string(),
            tours: vec![Tour {
                slug: Some("yala-safari".to_string()),
                title: "Yala Safari".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert!(category.find_tour("YALA-SAFARI").is_some());
        assert!(category.find_tour("wilpattu").is_none());
    }
}
