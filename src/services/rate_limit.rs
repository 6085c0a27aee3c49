// src/services/rate_limit.rs
// DOCUMENTATION: Per-client rate limiting for form submissions
// PURPOSE: Keep the contact and review forms from flooding the content API

use crate::errors::SiteError;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;

/// Keyed limiter for form posts
/// DOCUMENTATION: One bucket per client IP, refilled over a minute
pub struct FormRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
}

impl FormRateLimiter {
    /// Allow `per_minute` submissions per client, all of them usable as a burst
    pub fn new(per_minute: u32) -> Self {
        let per_minute = NonZeroU32::new(per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
        }
    }

    /// Take one submission slot for this client
    pub fn check(&self, client: &str) -> Result<(), SiteError> {
        self.limiter.check_key(&client.to_string()).map_err(|_| {
            log::warn!("Form rate limit exceeded for client {}", client);
            SiteError::RateLimitExceeded
        })
    }

    /// Drop buckets that are back to full capacity
    pub fn prune(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
        log::debug!("Form rate limiter tracking {} clients", self.tracked_clients());
    }

    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_per_client() {
        let limiter = FormRateLimiter::new(2);

        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(matches!(
            limiter.check("10.0.0.1"),
            Err(SiteError::RateLimitExceeded)
        ));

        // Other clients have their own bucket
        assert!(limiter.check("10.0.0.2").is_ok());
        assert_eq!(limiter.tracked_clients(), 2);
    }

    #[test]
    fn test_zero_quota_still_allows_one() {
        let limiter = FormRateLimiter::new(0);
        assert!(limiter.check("10.0.0.1").is_ok());
        assert!(limiter.check("10.0.0.1").is_err());
    }
}
