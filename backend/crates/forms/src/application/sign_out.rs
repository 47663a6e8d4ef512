//! Sign Out Use Case

use std::sync::Arc;

use security::session::{SessionStorage, SessionVault};

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStorage,
{
    vault: Arc<SessionVault<S>>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStorage,
{
    pub fn new(vault: Arc<SessionVault<S>>) -> Self {
        Self { vault }
    }

    /// Drop everything in session storage
    pub fn execute(&self) {
        self.vault.clear();
        tracing::info!("Signed out");
    }
}
