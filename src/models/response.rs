// src/models/response.rs
// DOCUMENTATION: Gateway response envelopes
// PURPOSE: Uniform shapes returned to the site regardless of the upstream envelope

use serde::{Deserialize, Serialize};

/// Where a piece of content came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Fetched from the content API for this request
    Live,
    /// Served from the in-memory cache
    Cache,
    /// Content API failed; static default served
    Fallback,
}

/// Single page or item response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentResponse<T> {
    pub data: T,
    pub source: ContentSource,
}

impl<T> ContentResponse<T> {
    pub fn new(data: T, source: ContentSource) -> Self {
        Self { data, source }
    }
}

/// Paging parameters for list routes
/// DOCUMENTATION: Applied locally; the content API returns full lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub const MAX_PAGE_SIZE: usize = 100;

/// Paged list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub source: ContentSource,
}

impl<T> PagedResponse<T> {
    /// Slice a full list according to the query
    /// DOCUMENTATION: limit is clamped to 1..=100 when given; without it the
    /// rest of the list after offset is returned
    pub fn from_list(items: Vec<T>, query: &ListQuery, source: ContentSource) -> Self {
        let total = items.len();
        let offset = query.offset.unwrap_or(0).min(total);
        let limit = match query.limit {
            Some(limit) => limit.clamp(1, MAX_PAGE_SIZE),
            None => total - offset,
        };

        let data: Vec<T> = items.into_iter().skip(offset).take(limit).collect();

        Self {
            data,
            total,
            limit,
            offset,
            source,
        }
    }
}
