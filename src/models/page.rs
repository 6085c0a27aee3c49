// src/models/page.rs
// DOCUMENTATION: Informational page content
// PURPOSE: Home, about, contact and services page shapes

use serde::{Deserialize, Serialize};

use super::{Destination, Review, Tour};

/// Hero banner at the top of the home page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub title: String,
    pub subtitle: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
    pub cta_label: Option<String>,
    pub cta_link: Option<String>,
}

/// Headline figure (e.g., "15+ years")
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Home page content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeContent {
    pub hero: Hero,
    pub intro: Option<String>,
    pub stats: Vec<Stat>,
    pub featured_tours: Vec<Tour>,
    pub featured_destinations: Vec<Destination>,
    pub testimonials: Vec<Review>,
}

/// Service the DMC offers (transfers, hotel bookings, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceOffering {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: Option<String>,
    pub photo: Option<String>,
    pub bio: Option<String>,
}

/// About-us page content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutContent {
    pub title: String,
    pub story: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Vec<String>,
    pub team: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Contact details shown in the footer and contact page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub office_hours: Option<String>,
    pub social: Vec<SocialLink>,
    pub map_embed_url: Option<String>,
}
