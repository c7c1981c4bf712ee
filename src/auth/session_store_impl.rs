use super::{Credentials, SessionStore};
use std::sync::RwLock;

///
/// In memory session. Lifecycle is tied to sign in and sign out,
/// signing out clears the identity and token at once.
///
pub struct SessionStoreImpl {
    credentials: RwLock<Option<Credentials>>,
}

impl SessionStoreImpl {
    pub fn new() -> Self {
        Self {
            credentials: RwLock::new(None),
        }
    }

    pub fn sign_in(&self, credentials: Credentials) {
        tracing::info!(seller_id = credentials.seller_id, "signing in");
        let mut lock = self
            .credentials
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *lock = Some(credentials);
    }

    pub fn sign_out(&self) {
        tracing::info!("signing out");
        let mut lock = self
            .credentials
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *lock = None;
    }
}

impl Default for SessionStoreImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for SessionStoreImpl {
    fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
