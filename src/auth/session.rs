//! Session persistence: the profile record plus the marker cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile record lives in the [`KeyValueStore`] and is what the auth
//! context hydrates from. The cookie is what the routing gate reads. Both are
//! written together on login and cleared together on logout; mount clears the
//! cookie alone when no profile backs it.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a record that does not deserialize is deleted and treated
//! as signed out. Only the login write path surfaces [`StoreError`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};

use super::{SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE, USER_STORAGE_KEY, User};
use crate::storage::{KeyValueStore, StoreError};

pub const DEFAULT_SESSION_DAYS: i64 = 7;

/// Attributes applied to the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookiePolicy {
    pub ttl: Duration,
    pub secure: bool,
}

impl Default for SessionCookiePolicy {
    fn default() -> Self {
        Self { ttl: Duration::days(DEFAULT_SESSION_DAYS), secure: false }
    }
}

/// Reads and writes both halves of a session.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    policy: SessionCookiePolicy,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, policy: SessionCookiePolicy) -> Self {
        Self { storage, policy }
    }

    #[must_use]
    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Write the profile record, then set the marker cookie on `jar`.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the record cannot be written; the cookie
    /// is left untouched in that case.
    pub fn persist_session(&self, user: &User, jar: CookieJar) -> Result<CookieJar, StoreError> {
        let raw = serde_json::to_string(user)?;
        self.storage.set(USER_STORAGE_KEY, &raw)?;

        let cookie = Cookie::build((SESSION_COOKIE_NAME, SESSION_COOKIE_VALUE))
            .path("/")
            .secure(self.policy.secure)
            .expires(OffsetDateTime::now_utc() + self.policy.ttl);
        Ok(jar.add(cookie))
    }

    /// Expire the marker cookie and delete the profile record.
    pub fn clear_session(&self, jar: CookieJar) -> CookieJar {
        let jar = self.clear_cookie(jar);
        if let Err(e) = self.storage.remove(USER_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to remove stored user");
        }
        jar
    }

    /// Expire the marker cookie only.
    #[must_use]
    pub fn clear_cookie(&self, jar: CookieJar) -> CookieJar {
        let expired = Cookie::build((SESSION_COOKIE_NAME, ""))
            .path("/")
            .secure(self.policy.secure)
            .expires(OffsetDateTime::UNIX_EPOCH);
        jar.add(expired)
    }

    /// Read the stored profile. Unparsable records are deleted.
    #[must_use]
    pub fn load_user(&self) -> Option<User> {
        let raw = match self.storage.get(USER_STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored user");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupted stored user");
                if let Err(e) = self.storage.remove(USER_STORAGE_KEY) {
                    tracing::warn!(error = %e, "failed to remove corrupted stored user");
                }
                None
            }
        }
    }
}

/// Non-empty marker value carried by `jar`, if any.
#[must_use]
pub fn session_marker(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE_NAME).map(Cookie::value).filter(|value| !value.is_empty())
}
