//! Auth-session state for the current page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`AuthContext`] is mounted per page request by
//! [`provide_auth`](super::provide_auth). Handlers read the current user from
//! it and call `login`/`logout`; every cookie change it makes is collected in
//! its jar and written onto the response by the provider.
//!
//! LIFECYCLE
//! =========
//! `new` -> `loading = true`, no user. `hydrate` adopts the stored profile or
//! expires an orphaned cookie, then clears `loading`. `login` and `logout`
//! move between signed-in and signed-out afterwards.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum_extra::extract::cookie::CookieJar;

use super::session::SessionStore;
use super::verifier::CredentialVerifier;
use super::{SESSION_COOKIE_NAME, User};
use crate::storage::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("failed to persist session: {0}")]
    Persist(#[from] StoreError),
}

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Shared handle to one mounted auth context. Clones observe the same state.
#[derive(Clone)]
pub struct AuthContext {
    inner: Arc<Inner>,
}

struct Inner {
    session: SessionStore,
    verifier: Arc<dyn CredentialVerifier>,
    state: Mutex<AuthState>,
    jar: Mutex<CookieJar>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AuthContext {
    /// Create an unhydrated context over the request's cookies.
    #[must_use]
    pub fn new(session: SessionStore, verifier: Arc<dyn CredentialVerifier>, jar: CookieJar) -> Self {
        Self {
            inner: Arc::new(Inner {
                session,
                verifier,
                state: Mutex::new(AuthState { user: None, loading: true }),
                jar: Mutex::new(jar),
            }),
        }
    }

    /// Create a context and hydrate it immediately.
    #[must_use]
    pub fn mount(session: SessionStore, verifier: Arc<dyn CredentialVerifier>, jar: CookieJar) -> Self {
        let cx = Self::new(session, verifier, jar);
        cx.hydrate();
        cx
    }

    /// Restore the signed-in user from storage.
    ///
    /// Without a stored user a marker cookie sent with the request is expired,
    /// so the routing gate never trusts a cookie that has no profile behind
    /// it. Requests without the cookie get no removal header.
    pub fn hydrate(&self) {
        match self.inner.session.load_user() {
            Some(user) => {
                tracing::debug!(email = %user.email, "auth hydrated from storage");
                lock(&self.inner.state).user = Some(user);
            }
            None => {
                let has_cookie = lock(&self.inner.jar).get(SESSION_COOKIE_NAME).is_some();
                if has_cookie {
                    self.update_jar(|jar| self.inner.session.clear_cookie(jar));
                }
            }
        }
        lock(&self.inner.state).loading = false;
    }

    /// Check credentials and, on a match, persist and adopt the session.
    ///
    /// Returns `Ok(false)` for rejected credentials without touching state,
    /// storage, or cookies.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Persist`] if the profile record cannot be written.
    /// The context stays signed out in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, AuthError> {
        let Some(user) = self.inner.verifier.verify(email, password).await else {
            tracing::debug!(email, "login rejected");
            return Ok(false);
        };

        {
            let mut jar = lock(&self.inner.jar);
            *jar = self.inner.session.persist_session(&user, jar.clone())?;
        }
        tracing::info!(email = %user.email, "login succeeded");
        lock(&self.inner.state).user = Some(user);
        Ok(true)
    }

    /// Drop the current user and clear both halves of the session.
    pub fn logout(&self) {
        lock(&self.inner.state).user = None;
        self.update_jar(|jar| self.inner.session.clear_session(jar));
        tracing::debug!("logged out");
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        lock(&self.inner.state).clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        lock(&self.inner.state).user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        lock(&self.inner.state).is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        lock(&self.inner.state).loading
    }

    /// Current jar, including every cookie change made through this context.
    #[must_use]
    pub fn cookie_jar(&self) -> CookieJar {
        lock(&self.inner.jar).clone()
    }

    fn update_jar(&self, f: impl FnOnce(CookieJar) -> CookieJar) {
        let mut jar = lock(&self.inner.jar);
        *jar = f(jar.clone());
    }
}
