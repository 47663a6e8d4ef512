//! Shared Kernel - Cross-crate error vocabulary
//!
//! This crate holds the small set of types every PayStream crate agrees on:
//! - The unified [`error::app_error::AppError`] and its result alias
//! - The [`error::kind::ErrorKind`] classification
//! - Per-field validation messages ([`error::field::FieldErrors`])
//!
//! Nothing in here knows about forms, rate limits, or sessions.

pub mod error {
    pub mod app_error;
    pub mod field;
    pub mod kind;
}
