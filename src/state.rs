//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. It holds the session store (and through it the origin-wide
//! key-value store), the credential verifier, and the routing gate rules.
//! Per-request auth state is not kept here; each page request mounts its own
//! context.

use std::sync::Arc;

use crate::auth::{CredentialVerifier, MockCredentials, SessionCookiePolicy, SessionStore};
use crate::config::AppConfig;
use crate::gate::RouteGate;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub gate: RouteGate,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, policy: SessionCookiePolicy, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { session: SessionStore::new(storage, policy), verifier, gate: RouteGate::default() }
    }

    /// Build state from runtime config, opening file storage when configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured storage file cannot be opened.
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let storage: Arc<dyn KeyValueStore> = match &config.storage_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        let policy = SessionCookiePolicy { ttl: time::Duration::days(config.session_days), secure: config.cookie_secure };
        let verifier = Arc::new(MockCredentials::new(config.login_latency));
        Ok(Self::new(storage, policy, verifier))
    }

    /// Origin-wide key-value store shared by sessions and preferences.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        self.session.storage()
    }
}
