//! Forms Module
//!
//! Validation schemas and simulated flows for the login, register, and
//! contact forms.
//!
//! Layout:
//! - `domain/` - Form inputs, validation rules, the `Email` value object
//! - `application/` - Use cases that validate, rate limit, "call the
//!   network" (a timer), and touch session storage
//!
//! ## Security Model
//! - Every submission is validated before anything else happens
//! - Identifying fields are screened by `security::threat`; free text is
//!   escaped instead
//! - Each use case rate limits under its own key on a limiter the caller
//!   owns, so flows never share a budget by accident
//! - No credentials are checked: there is no backend

pub mod application;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use application::config::FlowConfig;
pub use application::{
    CheckSessionUseCase, ContactReceipt, FormService, SessionInfo, SignInOutput, SignInUseCase,
    SignOutUseCase, SignUpOutput, SignUpUseCase, SubmitContactUseCase,
};
pub use domain::{ContactForm, Email, LoginForm, RegisterForm};
pub use error::{FormError, FormResult};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    field::FieldErrors,
    kind::ErrorKind,
};
