// src/models/common.rs
// DOCUMENTATION: Shared helpers for content models
// PURPOSE: Slug handling and lenient field decoding for content API payloads

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Content that can be addressed by a URL slug
pub trait Slugged {
    fn slug(&self) -> Option<&str>;

    fn has_slug(&self, slug: &str) -> bool {
        self.slug()
            .map(|own| own.eq_ignore_ascii_case(slug))
            .unwrap_or(false)
    }
}

/// Find an item by slug in a slice of content
pub fn find_by_slug<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.has_slug(slug))
}

/// Check a slug received in a request path
/// DOCUMENTATION: Lowercase ASCII letters, digits and single hyphens, max 120 chars
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 120
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Decode a number that the content API sometimes sends as a string
/// DOCUMENTATION: Accepts 1200, 1200.5, "1200", "USD 1,200", "Rs. 15,000".
/// The currency prefix (dot included) and any trailing text are dropped; commas
/// are thousands separators. Anything else is None
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_price_label(&s),
        _ => None,
    })
}

fn parse_price_label(label: &str) -> Option<f64> {
    let amount = label.trim_start_matches(|c: char| !c.is_ascii_digit());
    let number: String = amount
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    number.trim_end_matches('.').parse().ok()
}
