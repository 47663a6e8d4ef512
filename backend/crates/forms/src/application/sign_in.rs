//! Sign In Use Case
//!
//! Validates the login form, then issues a session token. There is no
//! credential store, so any well-formed submission succeeds.

use std::sync::Arc;

use security::crypto::generate_secure_token;
use security::rate_limit::RateLimitStore;
use security::session::{SessionStorage, SessionVault};
use serde::Serialize;

use crate::application::config::FlowConfig;
use crate::application::guard::{enforce_limit, screen, simulate_round_trip};
use crate::application::keys;
use crate::domain::{Email, LoginForm};
use crate::error::{FormError, FormResult};

/// Rate limit key for sign-in attempts
pub const SIGN_IN_KEY: &str = "auth:sign_in";

/// Sign in output
#[derive(Debug, Clone, Serialize)]
pub struct SignInOutput {
    /// Token persisted under `session_token`
    pub session_token: String,
    pub email: Email,
    pub remember_me: bool,
}

/// Sign in use case
pub struct SignInUseCase<L, S>
where
    L: RateLimitStore,
    S: SessionStorage,
{
    limiter: Arc<L>,
    vault: Arc<SessionVault<S>>,
    config: Arc<FlowConfig>,
}

impl<L, S> SignInUseCase<L, S>
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

    pub async fn execute(&self, form: LoginForm) -> FormResult<SignInOutput> {
        let login = form.validate().map_err(FormError::Validation)?;
        screen(&[("email", login.email.as_str())])?;

        enforce_limit(&*self.limiter, SIGN_IN_KEY, &self.config.sign_in_limit).await?;
        simulate_round_trip(self.config.simulated_latency).await;

        let session_token = generate_secure_token(self.config.session_token_bytes);
        self.vault.store(keys::SESSION_TOKEN, &session_token);
        self.vault.store(keys::SESSION_EMAIL, login.email.as_str());
        self.vault
            .store(keys::REMEMBER_ME, if login.remember_me { "true" } else { "false" });

        tracing::info!(
            email_domain = %login.email.domain(),
            remember_me = login.remember_me,
            "Signed in"
        );

        Ok(SignInOutput {
            session_token,
            email: login.email,
            remember_me: login.remember_me,
        })
    }
}
