//! Shared field rules

use kernel::error::field::FieldErrors;

use super::email::Email;

/// Length bounds in characters, inclusive on both ends
pub(crate) fn check_length(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min {
        errors.push(field, format!("{label} must be at least {min} characters"));
    } else if len > max {
        errors.push(field, format!("{label} must be less than {max} characters"));
    }
}

/// Parse the email field, recording a message on failure
pub(crate) fn check_email(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<Email> {
    match Email::new(value) {
        Ok(email) => Some(email),
        Err(e) => {
            errors.push(field, e.to_string());
            None
        }
    }
}
