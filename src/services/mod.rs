// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod cache;
pub mod content_client;
pub mod content_service;
pub mod envelope;
pub mod fallback;
pub mod rate_limit;

pub use cache::*;
pub use content_client::ContentApiClient;
pub use content_service::*;
pub use fallback::*;
pub use rate_limit::*;
