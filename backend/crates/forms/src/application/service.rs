//! Form Service
//!
//! Owns the limiter, session vault and config shared by every flow, and
//! hands out the use cases wired to them.

use std::sync::Arc;

use security::rate_limit::{RateLimitStore, SlidingWindowLimiter};
use security::session::{MemorySessionStorage, SessionStorage, SessionVault};

use crate::application::check_session::{CheckSessionUseCase, SessionInfo};
use crate::application::config::FlowConfig;
use crate::application::contact::{ContactReceipt, SubmitContactUseCase};
use crate::application::sign_in::{SignInOutput, SignInUseCase};
use crate::application::sign_out::SignOutUseCase;
use crate::application::sign_up::{SignUpOutput, SignUpUseCase};
use crate::domain::{ContactForm, LoginForm, RegisterForm};
use crate::error::FormResult;

pub struct FormService<L, S>
where
    L: RateLimitStore,
    S: SessionStorage,
{
    limiter: Arc<L>,
    vault: Arc<SessionVault<S>>,
    config: Arc<FlowConfig>,
}

impl FormService<SlidingWindowLimiter, MemorySessionStorage> {
    /// In-memory limiter and session storage
    pub fn in_memory(config: FlowConfig) -> Self {
        Self::new(
            Arc::new(SlidingWindowLimiter::default()),
            Arc::new(SessionVault::new(MemorySessionStorage::new())),
            Arc::new(config),
        )
    }
}

impl<L, S> FormService<L, S>
where
    L: RateLimitStore,
    S: SessionStorage,
{
    pub fn new(limiter: Arc<L>, vault: Arc<SessionVault<S>>, config: Arc<FlowConfig>) -> Self {
        Self {
            limiter,
            vault,
            config,
        }
    }

    pub async fn sign_in(&self, form: LoginForm) -> FormResult<SignInOutput> {
        SignInUseCase::new(self.limiter.clone(), self.vault.clone(), self.config.clone())
            .execute(form)
            .await
    }

    pub async fn sign_up(&self, form: RegisterForm) -> FormResult<SignUpOutput> {
        SignUpUseCase::new(self.limiter.clone(), self.config.clone())
            .execute(form)
            .await
    }

    pub async fn submit_contact(&self, form: ContactForm) -> FormResult<ContactReceipt> {
        SubmitContactUseCase::new(self.limiter.clone(), self.config.clone())
            .execute(form)
            .await
    }

    pub fn sign_out(&self) {
        SignOutUseCase::new(self.vault.clone()).execute();
    }

    pub fn current_session(&self) -> Option<SessionInfo> {
        CheckSessionUseCase::new(self.vault.clone()).execute()
    }

    pub fn vault(&self) -> &SessionVault<S> {
        &self.vault
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }
}
