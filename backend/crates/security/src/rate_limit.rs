//! Rate Limiting Infrastructure
//!
//! Sliding-window request limiting keyed by an arbitrary request category.
//!
//! Each key keeps the timestamps of its allowed requests. A timestamp
//! counts against the limit until it is a full window old; expired entries
//! are evicted lazily the next time the key is checked. The window slides
//! continuously with the clock rather than resetting at fixed boundaries.
//!
//! There is no process-wide instance. Whoever owns the forms constructs a
//! limiter at startup and passes it down; callers sharing an instance must
//! pick a distinct key per rate-limited operation.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use thiserror::Error;

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed in the window
    pub max_requests: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    pub fn window_ms(&self) -> i64 {
        self.window.as_millis() as i64
    }
}

/// Rate limit check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    pub allowed: bool,
    pub remaining: u32,
    /// When the oldest counted request leaves the window (ms since epoch)
    pub reset_at_ms: i64,
    /// Whole seconds until another request would be allowed (0 if allowed now)
    pub retry_after_secs: u64,
}

/// Rate limit backend failures
#[derive(Debug, Error)]
pub enum RateLimitError {
    #[error("Rate limit backend unavailable: {0}")]
    Backend(String),
}

/// Trait for rate limit storage backends
#[trait_variant::make(RateLimitStore: Send)]
pub trait LocalRateLimitStore {
    /// Check and record a request for `key` under `config`
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError>;
}

// ============================================================================
// Clock
// ============================================================================

/// Wall-clock source in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Manually advanced clock, shared between clones
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Arc<AtomicI64>);

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self(Arc::new(AtomicI64::new(start_ms)))
    }

    pub fn advance(&self, by: Duration) {
        self.0.fetch_add(by.as_millis() as i64, Ordering::SeqCst);
    }

    pub fn set(&self, now_ms: i64) {
        self.0.store(now_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Sliding window limiter
// ============================================================================

/// Requests recorded for one key, with the limits they were counted under
#[derive(Debug)]
struct KeyWindow {
    config: RateLimitConfig,
    hits: VecDeque<i64>,
}

impl KeyWindow {
    fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            hits: VecDeque::new(),
        }
    }

    fn evict_expired(&mut self, now: i64) {
        let window = self.config.window_ms();
        while let Some(&oldest) = self.hits.front() {
            if now - oldest >= window {
                self.hits.pop_front();
            } else {
                break;
            }
        }
    }
}

/// In-memory sliding-window limiter
///
/// The per-key timestamp list is only touched while holding the map's entry
/// guard, so evict-count-append is atomic even with parallel callers.
///
/// A key remembers the config of its most recent [`check`](Self::check).
/// The limiter's own config applies only to keys that have never been
/// checked, so [`can_make_request`](Self::can_make_request) and
/// [`time_until_next_request`](Self::time_until_next_request) agree with the
/// flow that owns the key.
pub struct SlidingWindowLimiter {
    config: RateLimitConfig,
    clock: Arc<dyn Clock>,
    windows: DashMap<String, KeyWindow>,
}

impl Default for SlidingWindowLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl SlidingWindowLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: RateLimitConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            windows: DashMap::new(),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Config `key` is currently counted under
    pub fn config_for(&self, key: &str) -> RateLimitConfig {
        self.windows
            .get(key)
            .map(|window| window.config.clone())
            .unwrap_or_else(|| self.config.clone())
    }

    /// Record a request for `key` if the key's limit allows it
    pub fn can_make_request(&self, key: &str) -> bool {
        let config = self.config_for(key);
        self.check(key, &config).allowed
    }

    /// Seconds until `key` may make another request, 0 if it may now
    ///
    /// Computed as `ceil((oldest + window - now) / 1000)` once the key has
    /// used up its limit. Does not record anything.
    pub fn time_until_next_request(&self, key: &str) -> u64 {
        let Some(window) = self.windows.get(key) else {
            return 0;
        };
        let now = self.clock.now_ms();
        let window_ms = window.config.window_ms();
        let live = window.hits.iter().filter(|&&t| now - t < window_ms).count();
        if live < window.config.max_requests as usize {
            return 0;
        }
        window
            .hits
            .iter()
            .find(|&&t| now - t < window_ms)
            .map_or(0, |&oldest| secs_until(oldest + window_ms, now))
    }

    /// Evict expired timestamps, then allow and record if under `config`'s limit
    pub fn check(&self, key: &str, config: &RateLimitConfig) -> RateLimitResult {
        let now = self.clock.now_ms();
        let window = config.window_ms();
        let limit = config.max_requests as usize;

        let mut entry = self
            .windows
            .entry(key.to_string())
            .or_insert_with(|| KeyWindow::new(config.clone()));
        entry.config = config.clone();
        entry.evict_expired(now);

        let allowed = entry.hits.len() < limit;
        if allowed {
            entry.hits.push_back(now);
        }

        let reset_at_ms = entry.hits.front().map_or(now + window, |&oldest| oldest + window);
        let retry_after_secs = if entry.hits.len() < limit {
            0
        } else {
            secs_until(reset_at_ms, now)
        };

        if !allowed {
            tracing::debug!(
                key = %key,
                limit = config.max_requests,
                retry_after_secs,
                "Rate limit exceeded"
            );
        }

        RateLimitResult {
            allowed,
            remaining: limit.saturating_sub(entry.hits.len()) as u32,
            reset_at_ms,
            retry_after_secs,
        }
    }

    /// Forget all requests recorded for `key`
    pub fn reset(&self, key: &str) {
        self.windows.remove(key);
    }

    /// Drop keys whose requests have all left their own window
    pub fn prune(&self) {
        let now = self.clock.now_ms();
        self.windows.retain(|_, window| {
            let window_ms = window.config.window_ms();
            window.hits.back().is_some_and(|&newest| now - newest < window_ms)
        });
    }

    /// Number of keys currently tracked
    pub fn tracked_keys(&self) -> usize {
        self.windows.len()
    }
}

impl RateLimitStore for SlidingWindowLimiter {
    async fn check_and_increment(
        &self,
        key: &str,
        config: &RateLimitConfig,
    ) -> Result<RateLimitResult, RateLimitError> {
        Ok(self.check(key, config))
    }
}

fn secs_until(target_ms: i64, now_ms: i64) -> u64 {
    let remaining = target_ms - now_ms;
    if remaining <= 0 {
        0
    } else {
        (remaining as u64).div_ceil(1000)
    }
}
