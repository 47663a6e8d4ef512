//! Domain Layer
//!
//! Form inputs and their validation rules.

pub mod contact;
pub mod email;
pub mod login;
pub mod register;
mod rules;

pub use contact::{ContactForm, ValidContact};
pub use email::{Email, EmailError, is_valid_email};
pub use login::{LoginForm, ValidLogin};
pub use register::{RegisterForm, ValidRegistration};
