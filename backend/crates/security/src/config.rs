//! Security Configuration

use std::time::Duration;

use crate::crypto::DEFAULT_TOKEN_BYTES;
use crate::rate_limit::{RateLimitConfig, SlidingWindowLimiter};

/// Settings shared by the security helpers
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Limits for the application's shared limiter
    pub rate_limit: RateLimitConfig,
    /// Size of generated session/CSRF tokens in bytes
    pub token_bytes: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            rate_limit: RateLimitConfig::default(),
            token_bytes: DEFAULT_TOKEN_BYTES,
        }
    }
}

impl SecurityConfig {
    /// Relaxed limits for local development
    pub fn development() -> Self {
        Self {
            rate_limit: RateLimitConfig {
                max_requests: 100,
                window: Duration::from_secs(60),
            },
            ..Default::default()
        }
    }

    /// Build the limiter the application owns for its lifetime
    pub fn build_limiter(&self) -> SlidingWindowLimiter {
        SlidingWindowLimiter::new(self.rate_limit.clone())
    }
}
