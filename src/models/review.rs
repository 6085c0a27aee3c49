// src/models/review.rs
// DOCUMENTATION: Guest review models
// PURPOSE: Reviews shown on the site and the review form payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest review shown on the site
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub country: Option<String>,
    pub rating: f32,
    pub title: Option<String>,
    pub comment: String,
    /// Tour the guest travelled on
    pub tour: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Whether the review can be shown: rating within 1..=5 and a non-empty comment
    pub fn is_displayable(&self) -> bool {
        (1.0..=5.0).contains(&self.rating) && !self.comment.trim().is_empty()
    }
}

/// Review submitted through the site form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmission {
    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 80))]
    pub country: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 2000))]
    pub comment: String,

    #[serde(default)]
    pub tour: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ReviewSubmission {
        ReviewSubmission {
            name: "Amara".to_string(),
            email: "amara@example.com".to_string(),
            country: Some("Germany".to_string()),
            rating: 5,
            title: None,
            comment: "Our driver made the whole trip effortless.".to_string(),
            tour: Some("cultural-triangle".to_string()),
        }
    }

    #[test]
    fn test_valid_submission() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn test_rating_out_of_range() {
        let mut s = submission();
        s.rating = 6;
        let errors = s.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));

        s.rating = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_bad_email_and_short_comment() {
        let mut s = submission();
        s.email = "not-an-email".to_string();
        s.comment = "ok".to_string();
        let errors = s.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("comment"));
    }

    #[test]
    fn test_displayable_review() {
        let review = Review {
            name: "Tom".to_string(),
            rating: 4.5,
            comment: "Loved Sigiriya".to_string(),
            ..Default::default()
        };
        assert!(review.is_displayable());

        let unrated = Review {
            rating: 0.0,
            ..review.clone()
        };
        assert!(!unrated.is_displayable());

        let empty = Review {
            comment: "  ".to_string(),
            ..review
        };
        assert!(!empty.is_displayable());
    }
}
