//! Register Form

use kernel::error::field::FieldErrors;
use security::password::{MIN_PASSWORD_LENGTH, validate_password};

use super::email::Email;
use super::rules::{check_email, check_length};

/// Raw register form input
#[derive(Clone, Default)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

/// Registration that passed validation
#[derive(Clone)]
pub struct ValidRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(self) -> Result<ValidRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();

        check_length(&mut errors, "first_name", "First name", &self.first_name, 2, 50);
        check_length(&mut errors, "last_name", "Last name", &self.last_name, 2, 50);
        let email = check_email(&mut errors, "email", &self.email);

        for message in validate_password(&self.password).errors {
            errors.push("password", message);
        }

        if self.confirm_password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("confirm_password", "Password must be at least 8 characters");
        }
        if self.password != self.confirm_password {
            errors.push("confirm_password", "Passwords do not match");
        }

        if !self.terms {
            errors.push("terms", "You must accept the terms and conditions");
        }

        match email {
            Some(email) if errors.is_empty() => Ok(ValidRegistration {
                first_name: self.first_name,
                last_name: self.last_name,
                email,
                password: self.password,
            }),
            _ => Err(errors),
        }
    }
}

impl ValidRegistration {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

impl std::fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("confirm_password", &"[REDACTED]")
            .field("terms", &self.terms)
            .finish()
    }
}

impl std::fmt::Debug for ValidRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidRegistration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
