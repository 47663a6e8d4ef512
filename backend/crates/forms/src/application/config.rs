//! Application Configuration
//!
//! Configuration for the simulated form flows.

use std::time::Duration;

use security::crypto::DEFAULT_TOKEN_BYTES;
use security::rate_limit::RateLimitConfig;

/// Flow configuration
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Delay standing in for a network round trip
    pub simulated_latency: Duration,
    /// Session token length in bytes
    pub session_token_bytes: usize,
    /// Rate limit for sign-in attempts
    pub sign_in_limit: RateLimitConfig,
    /// Rate limit for registrations
    pub sign_up_limit: RateLimitConfig,
    /// Rate limit for contact submissions
    pub contact_limit: RateLimitConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(1500),
            session_token_bytes: DEFAULT_TOKEN_BYTES,
            sign_in_limit: RateLimitConfig::new(5, 60),
            sign_up_limit: RateLimitConfig::new(3, 60),
            contact_limit: RateLimitConfig::new(3, 60),
        }
    }
}

impl FlowConfig {
    /// Short latency for local development
    pub fn development() -> Self {
        Self {
            simulated_latency: Duration::from_millis(200),
            ..Default::default()
        }
    }

    /// No latency at all (tests, scripted CLI runs)
    pub fn instant() -> Self {
        Self {
            simulated_latency: Duration::ZERO,
            ..Default::default()
        }
    }
}
