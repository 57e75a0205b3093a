//! Credential verification seam.
//!
//! The shipped [`MockCredentials`] stands in for an identity provider: one
//! fixed credential pair behind a simulated network round trip. A real
//! backend implements [`CredentialVerifier`] and plugs into the same auth
//! context without touching its state handling.

#[cfg(test)]
#[path = "verifier_test.rs"]
mod verifier_test;

use std::time::Duration;

use async_trait::async_trait;

use super::User;

pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(500);
pub const MOCK_EMAIL: &str = "admin";
pub const MOCK_PASSWORD: &str = "admin";
pub const MOCK_DISPLAY_NAME: &str = "Administrator";

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Resolve `email`/`password` to a user, or `None` when they do not match.
    async fn verify(&self, email: &str, password: &str) -> Option<User>;
}

/// Single hard-coded credential pair with artificial latency.
#[derive(Debug, Clone)]
pub struct MockCredentials {
    email: String,
    password: String,
    display_name: String,
    latency: Duration,
}

impl MockCredentials {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self {
            email: MOCK_EMAIL.to_owned(),
            password: MOCK_PASSWORD.to_owned(),
            display_name: MOCK_DISPLAY_NAME.to_owned(),
            latency,
        }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for MockCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_LATENCY)
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentials {
    async fn verify(&self, email: &str, password: &str) -> Option<User> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        (email == self.email && password == self.password)
            .then(|| User { email: email.to_owned(), name: self.display_name.clone() })
    }
}
