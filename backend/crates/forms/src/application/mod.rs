//! Application Layer
//!
//! Use cases for the simulated form flows.

pub mod check_session;
pub mod config;
pub mod contact;
mod guard;
pub mod service;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;

// Re-exports
pub use check_session::{CheckSessionUseCase, SessionInfo};
pub use config::FlowConfig;
pub use contact::{ContactReceipt, SubmitContactUseCase};
pub use service::FormService;
pub use sign_in::{SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpOutput, SignUpUseCase};

/// Session storage keys written by sign-in
pub mod keys {
    pub const SESSION_TOKEN: &str = "session_token";
    pub const SESSION_EMAIL: &str = "session_email";
    pub const REMEMBER_ME: &str = "remember_me";
}
