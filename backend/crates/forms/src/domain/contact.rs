//! Contact Form

use kernel::error::field::FieldErrors;
use serde::Serialize;

use super::email::Email;
use super::rules::{check_email, check_length};

/// Raw contact form input
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// Optional; empty means not provided
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Contact form that passed validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidContact {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Validate every field, reporting all failures at once
    pub fn validate(self) -> Result<ValidContact, FieldErrors> {
        let mut errors = FieldErrors::new();

        check_length(&mut errors, "name", "Name", &self.name, 2, 50);
        let email = check_email(&mut errors, "email", &self.email);

        let phone = self.phone.trim();
        if !phone.is_empty() {
            let digits = phone.chars().count();
            if digits < 7 {
                errors.push("phone", "Phone number must be at least 7 digits");
            } else if digits > 15 {
                errors.push("phone", "Phone number must be less than 15 digits");
            }
        }

        check_length(&mut errors, "subject", "Subject", &self.subject, 3, 100);
        check_length(&mut errors, "message", "Message", &self.message, 10, 1000);

        match email {
            Some(email) if errors.is_empty() => Ok(ValidContact {
                name: self.name,
                email,
                phone: (!phone.is_empty()).then(|| phone.to_string()),
                subject: self.subject,
                message: self.message,
            }),
            _ => Err(errors),
        }
    }
}
