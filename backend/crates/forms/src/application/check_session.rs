//! Check Session Use Case
//!
//! Reads back what sign-in stored.

use std::sync::Arc;

use security::session::{SessionStorage, SessionVault};
use serde::Serialize;

use crate::application::keys;

/// Current session, as decoded from storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub session_token: String,
    pub email: Option<String>,
    pub remember_me: bool,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStorage,
{
    vault: Arc<SessionVault<S>>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStorage,
{
    pub fn new(vault: Arc<SessionVault<S>>) -> Self {
        Self { vault }
    }

    /// `None` when no token is stored or it cannot be decoded
    pub fn execute(&self) -> Option<SessionInfo> {
        let session_token = self.vault.retrieve(keys::SESSION_TOKEN)?;
        Some(SessionInfo {
            session_token,
            email: self.vault.retrieve(keys::SESSION_EMAIL),
            remember_me: self.vault.retrieve(keys::REMEMBER_ME).as_deref() == Some("true"),
        })
    }
}
