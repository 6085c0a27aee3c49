// src/models/excursion.rs
// DOCUMENTATION: Excursion and destination shapes
// PURPOSE: Day trips and the places they visit

use serde::{Deserialize, Serialize};

use super::common::{lenient_f64, Slugged};

/// Day excursion (e.g., "Galle Fort Walk")
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Excursion {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: String,
    pub location: Option<String>,
    pub duration: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<String>,
}

/// Destination featured on the destinations page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: String,
    /// Province or area (e.g., "Central Province")
    pub region: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub highlights: Vec<String>,
}

impl Slugged for Excursion {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}

impl Slugged for Destination {
    fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}
