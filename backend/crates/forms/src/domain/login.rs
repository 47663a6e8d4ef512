//! Login Form

use kernel::error::field::FieldErrors;
use security::password::MIN_PASSWORD_LENGTH;

use super::email::Email;
use super::rules::check_email;

/// Raw login form input
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

/// Login form that passed validation
#[derive(Debug, Clone)]
pub struct ValidLogin {
    pub email: Email,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(self) -> Result<ValidLogin, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = check_email(&mut errors, "email", &self.email);
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            errors.push("password", "Password must be at least 8 characters");
        }

        match email {
            Some(email) if errors.is_empty() => Ok(ValidLogin {
                email,
                remember_me: self.remember_me,
            }),
            _ => Err(errors),
        }
    }
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}
