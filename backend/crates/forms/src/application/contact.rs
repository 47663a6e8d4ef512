//! Submit Contact Use Case

use std::sync::Arc;

use security::crypto::generate_secure_token;
use security::rate_limit::RateLimitStore;
use security::sanitize::sanitize;
use serde::Serialize;

use crate::application::config::FlowConfig;
use crate::application::guard::{enforce_limit, screen, simulate_round_trip};
use crate::domain::ContactForm;
use crate::error::{FormError, FormResult};

/// Rate limit key for contact submissions
pub const CONTACT_KEY: &str = "contact:submit";

/// Reference tokens are shorter than session tokens
const REFERENCE_BYTES: usize = 8;

/// What the sender gets back; every text field is escaped for display
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub reference: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Submit contact use case
pub struct SubmitContactUseCase<L>
where
    L: RateLimitStore,
{
    limiter: Arc<L>,
    config: Arc<FlowConfig>,
}

impl<L> SubmitContactUseCase<L>
where
    L: RateLimitStore,
{
    pub fn new(limiter: Arc<L>, config: Arc<FlowConfig>) -> Self {
        Self { limiter, config }
    }

    pub async fn execute(&self, form: ContactForm) -> FormResult<ContactReceipt> {
        let contact = form.validate().map_err(FormError::Validation)?;
        // The message is free text and gets escaped rather than screened
        screen(&[
            ("name", contact.name.as_str()),
            ("email", contact.email.as_str()),
            ("phone", contact.phone.as_deref().unwrap_or_default()),
            ("subject", contact.subject.as_str()),
        ])?;

        enforce_limit(&*self.limiter, CONTACT_KEY, &self.config.contact_limit).await?;
        simulate_round_trip(self.config.simulated_latency).await;

        let receipt = ContactReceipt {
            reference: generate_secure_token(REFERENCE_BYTES),
            name: sanitize(contact.name.trim()),
            email: sanitize(contact.email.as_str()),
            phone: contact.phone.as_deref().map(sanitize),
            subject: sanitize(contact.subject.trim()),
            message: sanitize(contact.message.trim()),
        };

        tracing::info!(reference = %receipt.reference, "Contact message accepted");
        Ok(receipt)
    }
}
