//! In-memory store for the current access credential.
//!
//! The credential lives for one page session and is never written to
//! durable storage; a reload starts empty and the bootstrap gate
//! re-derives it through the refresh endpoint.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use shared::models::Role;
use std::sync::{Arc, Mutex};

/// The live access credential: bearer token plus the role it grants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub access_token: String,
    pub role: Role,
}

/// Shared cell holding the current [`Credential`].
///
/// Handles are cheap to clone and all observe the same cell. Consumers
/// must read through the store at the moment they need the token — a
/// value captured earlier can be stale once a refresh has run.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<Mutex<Option<Credential>>>,
}

impl CredentialStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current credential, if any.
    pub fn get(&self) -> Option<Credential> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }

    /// Replace the credential wholesale.
    pub fn set(&self, credential: Credential) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(credential);
        }
    }

    /// Drop the credential.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = None;
        }
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.get()
            .map(|credential| format!("Bearer {}", credential.access_token))
    }

    /// Role granted to the current session.
    pub fn role(&self) -> Option<Role> {
        self.get().map(|credential| credential.role)
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}
