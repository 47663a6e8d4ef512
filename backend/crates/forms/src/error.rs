//! Form Error Types
//!
//! Flow-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, field::FieldErrors, kind::ErrorKind};
use security::rate_limit::RateLimitError;
use security::threat::ThreatKind;
use thiserror::Error;

/// Form-specific result type alias
pub type FormResult<T> = Result<T, FormError>;

/// Form flow error variants
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// A field looks like an injection or traversal attempt
    #[error("Suspicious input in field {field}")]
    ThreatDetected {
        field: &'static str,
        kinds: Vec<ThreatKind>,
    },

    /// The operation's rate limit is exhausted
    #[error("Too many {operation} attempts, retry in {retry_after_secs}s")]
    RateLimited {
        operation: &'static str,
        retry_after_secs: u64,
    },

    /// The limiter backend failed
    #[error(transparent)]
    Limiter(#[from] RateLimitError),
}

impl FormError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormError::Validation(_) => ErrorKind::UnprocessableEntity,
            FormError::ThreatDetected { .. } => ErrorKind::BadRequest,
            FormError::RateLimited { .. } => ErrorKind::TooManyRequests,
            FormError::Limiter(_) => ErrorKind::ServiceUnavailable,
        }
    }

    /// Convert to AppError
    ///
    /// Threat details stay in the logs; the user only learns which field
    /// was rejected.
    pub fn to_app_error(&self) -> AppError {
        match self {
            FormError::Validation(fields) => {
                AppError::unprocessable("Please correct the highlighted fields")
                    .with_fields(fields.clone())
            }
            FormError::ThreatDetected { field, .. } => {
                let mut fields = FieldErrors::new();
                fields.push(*field, "Contains characters that are not allowed");
                AppError::bad_request("Input rejected").with_fields(fields)
            }
            FormError::RateLimited {
                retry_after_secs, ..
            } => AppError::too_many_requests("Too many attempts")
                .with_action(format!(
                    "Please wait {} seconds before trying again",
                    retry_after_secs
                ))
                .with_retry_after(*retry_after_secs),
            FormError::Limiter(_) => AppError::service_unavailable("Please try again later"),
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            FormError::Limiter(e) => {
                tracing::error!(error = %e, "Rate limiter failure");
            }
            FormError::ThreatDetected { field, kinds } => {
                tracing::warn!(field = %field, rules = ?kinds, "Rejected suspicious input");
            }
            FormError::RateLimited {
                operation,
                retry_after_secs,
            } => {
                tracing::warn!(operation = %operation, retry_after_secs, "Rate limited");
            }
            FormError::Validation(fields) => {
                tracing::debug!(count = fields.len(), "Form validation failed");
            }
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        err.log();
        let app = err.to_app_error();
        match err {
            FormError::Limiter(source) => app.with_source(source),
            _ => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            FormError::Validation(FieldErrors::new()).kind(),
            ErrorKind::UnprocessableEntity
        );
        assert_eq!(
            FormError::RateLimited {
                operation: "sign-in",
                retry_after_secs: 5
            }
            .kind()
            .status_code(),
            429
        );
        assert_eq!(
            FormError::Limiter(RateLimitError::Backend("down".to_string())).kind(),
            ErrorKind::ServiceUnavailable
        );
    }

    #[test]
    fn test_rate_limited_carries_retry_hint() {
        let app: AppError = FormError::RateLimited {
            operation: "sign-in",
            retry_after_secs: 42,
        }
        .into();
        assert_eq!(app.retry_after_secs(), Some(42));
        assert!(app.action().unwrap().contains("42 seconds"));
    }

    #[test]
    fn test_threat_hides_rule_names() {
        let app = FormError::ThreatDetected {
            field: "subject",
            kinds: vec![ThreatKind::ScriptTag],
        }
        .to_app_error();
        assert!(app.fields().has_field("subject"));
        assert!(!app.to_json().unwrap().contains("script"));
    }

    #[test]
    fn test_limiter_failure_keeps_source() {
        use std::error::Error;

        let app: AppError = FormError::Limiter(RateLimitError::Backend("down".to_string())).into();
        assert_eq!(app.kind(), ErrorKind::ServiceUnavailable);
        let source = app.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("Rate limit backend unavailable: down"));
        assert!(!app.to_json().unwrap().contains("down"));
    }
}
