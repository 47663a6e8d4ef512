//! Environment Configuration
//!
//! Every variable is optional. Unset means the library default; set but
//! unparsable is a startup error.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use forms::FlowConfig;
use security::SecurityConfig;

pub const RATE_LIMIT_MAX: &str = "PAYSTREAM_RATE_LIMIT_MAX";
pub const RATE_LIMIT_WINDOW_SECS: &str = "PAYSTREAM_RATE_LIMIT_WINDOW_SECS";
pub const TOKEN_BYTES: &str = "PAYSTREAM_TOKEN_BYTES";
pub const SIMULATED_LATENCY_MS: &str = "PAYSTREAM_SIMULATED_LATENCY_MS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub security: SecurityConfig,
    pub flow: FlowConfig,
}

impl AppConfig {
    /// Read from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source
    ///
    /// The rate limit variables replace the shared limiter settings and
    /// every per-flow limit.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(max) = parse::<u32>(&lookup, RATE_LIMIT_MAX)? {
            config.security.rate_limit.max_requests = max;
            config.flow.sign_in_limit.max_requests = max;
            config.flow.sign_up_limit.max_requests = max;
            config.flow.contact_limit.max_requests = max;
        }
        if let Some(secs) = parse::<u64>(&lookup, RATE_LIMIT_WINDOW_SECS)? {
            let window = Duration::from_secs(secs);
            config.security.rate_limit.window = window;
            config.flow.sign_in_limit.window = window;
            config.flow.sign_up_limit.window = window;
            config.flow.contact_limit.window = window;
        }
        if let Some(bytes) = parse::<usize>(&lookup, TOKEN_BYTES)? {
            anyhow::ensure!(bytes > 0, "{TOKEN_BYTES} must be greater than zero");
            config.security.token_bytes = bytes;
            config.flow.session_token_bytes = bytes;
        }
        if let Some(ms) = parse::<u64>(&lookup, SIMULATED_LATENCY_MS)? {
            config.flow.simulated_latency = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {name}: {raw:?}"))
        })
        .transpose()
}
