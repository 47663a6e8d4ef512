//! Checks shared by every flow

use std::time::Duration;

use security::rate_limit::{RateLimitConfig, RateLimitStore};
use security::threat::scan;

use crate::error::{FormError, FormResult};

/// Reject the first field whose raw value matches a threat rule
pub(crate) fn screen(fields: &[(&'static str, &str)]) -> FormResult<()> {
    for &(field, value) in fields {
        let kinds = scan(value);
        if !kinds.is_empty() {
            return Err(FormError::ThreatDetected { field, kinds });
        }
    }
    Ok(())
}

/// Record an attempt for `key`, failing once the quota is spent
pub(crate) async fn enforce_limit<L: RateLimitStore>(
    limiter: &L,
    key: &'static str,
    config: &RateLimitConfig,
) -> FormResult<()> {
    let result = limiter.check_and_increment(key, config).await?;
    if result.allowed {
        tracing::debug!(key = %key, remaining = result.remaining, "Rate limit check passed");
        Ok(())
    } else {
        Err(FormError::RateLimited {
            operation: key,
            retry_after_secs: result.retry_after_secs,
        })
    }
}

/// Stand-in for the network round trip
pub(crate) async fn simulate_round_trip(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
