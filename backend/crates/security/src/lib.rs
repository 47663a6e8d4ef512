//! Security Crate - Client-side security utilities
//!
//! This crate provides the security helpers used by the PayStream forms:
//! - Markup escaping of user input
//! - Cryptographically secure tokens and CSP nonces
//! - Reversibly encoded session storage
//! - Sliding-window rate limiting
//! - Password strength scoring (detailed report and visual meter)
//! - Heuristic injection / traversal detection
//! - Transport and privacy disclosures, security meta tags
//!
//! None of these replace server-side defenses. They are first-line signals
//! for a UI that has no backend of its own.

pub mod config;
pub mod crypto;
pub mod headers;
pub mod password;
pub mod privacy;
pub mod rate_limit;
pub mod sanitize;
pub mod session;
pub mod threat;
pub mod transport;

pub use config::SecurityConfig;
pub use crypto::{generate_nonce, generate_secure_token};
pub use password::{PasswordStrength, StrengthTier, check_password_strength, meter_score};
pub use rate_limit::{RateLimitConfig, SlidingWindowLimiter};
pub use sanitize::sanitize;
pub use session::{MemorySessionStorage, SessionStorage, SessionVault};
pub use threat::{ThreatKind, detect_threat};
pub use transport::is_secure_connection;
