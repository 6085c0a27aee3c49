// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin;
pub mod content;
pub mod forms;
pub mod health;
#[cfg(test)]
pub mod test_support;

pub use admin::config as admin_config;
pub use content::config as content_config;
pub use forms::config as forms_config;
pub use health::config as health_config;

use crate::errors::SiteError;
use actix_web::web;

/// JSON body extractor settings
/// DOCUMENTATION: Malformed or incomplete bodies get the gateway error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| SiteError::InvalidInput(err.to_string()).into())
}

/// Query string extractor settings, same envelope as bodies
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| SiteError::InvalidInput(err.to_string()).into())
}
