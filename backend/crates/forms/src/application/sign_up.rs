//! Sign Up Use Case
//!
//! Validates the registration form and reports password strength. Nothing
//! is persisted.

use std::sync::Arc;

use security::password::{PasswordStrength, StrengthTier, check_password_strength, meter_score};
use security::rate_limit::RateLimitStore;
use serde::Serialize;

use crate::application::config::FlowConfig;
use crate::application::guard::{enforce_limit, screen, simulate_round_trip};
use crate::domain::{Email, RegisterForm};
use crate::error::{FormError, FormResult};

/// Rate limit key for registrations
pub const SIGN_UP_KEY: &str = "auth:sign_up";

/// Sign up output
#[derive(Debug, Clone, Serialize)]
pub struct SignUpOutput {
    pub email: Email,
    pub display_name: String,
    pub strength: PasswordStrength,
    pub meter_score: u8,
    pub tier: StrengthTier,
}

/// Sign up use case
pub struct SignUpUseCase<L>
where
    L: RateLimitStore,
{
    limiter: Arc<L>,
    config: Arc<FlowConfig>,
}

impl<L> SignUpUseCase<L>
where
    L: RateLimitStore,
{
    pub fn new(limiter: Arc<L>, config: Arc<FlowConfig>) -> Self {
        Self { limiter, config }
    }

    pub async fn execute(&self, form: RegisterForm) -> FormResult<SignUpOutput> {
        let registration = form.validate().map_err(FormError::Validation)?;
        screen(&[
            ("first_name", registration.first_name.as_str()),
            ("last_name", registration.last_name.as_str()),
            ("email", registration.email.as_str()),
        ])?;

        enforce_limit(&*self.limiter, SIGN_UP_KEY, &self.config.sign_up_limit).await?;
        simulate_round_trip(self.config.simulated_latency).await;

        let strength = check_password_strength(&registration.password);
        let meter = meter_score(&registration.password);

        tracing::info!(
            email_domain = %registration.email.domain(),
            strength = strength.score,
            "Registered"
        );

        Ok(SignUpOutput {
            display_name: registration.full_name(),
            email: registration.email,
            strength,
            meter_score: meter,
            tier: StrengthTier::from_score(meter),
        })
    }
}
