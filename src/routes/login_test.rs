use std::sync::Arc;
use std::time::Duration;

use axum_extra::extract::cookie::CookieJar;

use super::*;
use crate::auth::session::session_marker;
use crate::auth::{MockCredentials, SessionCookiePolicy, SessionStore};
use crate::storage::{KeyValueStore, MemoryStore, StoreError};

fn mount(storage: Arc<dyn KeyValueStore>) -> AuthContext {
    let session = SessionStore::new(storage, SessionCookiePolicy::default());
    AuthContext::mount(session, Arc::new(MockCredentials::new(Duration::ZERO)), CookieJar::new())
}

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned(), ..LoginForm::default() }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io { path: "read-only".into(), source: std::io::Error::other("read-only") })
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

// =============================================================================
// LoginForm::submit
// =============================================================================

#[tokio::test]
async fn valid_credentials_navigate_home() {
    let auth = mount(Arc::new(MemoryStore::new()));
    let mut form = form("admin", "admin");

    assert_eq!(form.submit(&auth).await, SubmitOutcome::Navigate("/"));
    assert!(form.error.is_none());
    assert!(!form.submitting);
    assert!(auth.is_authenticated());
    assert_eq!(session_marker(&auth.cookie_jar()), Some("authenticated"));
}

#[tokio::test]
async fn invalid_credentials_stay_with_message() {
    let auth = mount(Arc::new(MemoryStore::new()));
    let mut form = form("admin", "nope");

    assert_eq!(form.submit(&auth).await, SubmitOutcome::Stay);
    assert_eq!(form.error.as_deref(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert!(!form.submitting);
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn storage_failure_shows_generic_message() {
    let auth = mount(Arc::new(ReadOnlyStore));
    let mut form = form("admin", "admin");

    assert_eq!(form.submit(&auth).await, SubmitOutcome::Stay);
    assert_eq!(form.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
    assert!(!form.submitting);
    assert!(!auth.is_authenticated());
}

#[tokio::test]
async fn resubmit_clears_previous_error() {
    let auth = mount(Arc::new(MemoryStore::new()));
    let mut form = form("admin", "wrong");
    form.submit(&auth).await;
    assert!(form.error.is_some());

    form.password = "admin".to_owned();
    assert_eq!(form.submit(&auth).await, SubmitOutcome::Navigate("/"));
    assert!(form.error.is_none());
}

// =============================================================================
// render
// =============================================================================

#[test]
fn render_keeps_email_and_drops_password() {
    let mut form = form("someone@example.com", "hunter2");
    form.error = Some(INVALID_CREDENTIALS_MESSAGE.to_owned());

    let Html(body) = render(&form).unwrap();
    assert!(body.contains(r#"value="someone@example.com""#));
    assert!(!body.contains("hunter2"));
    assert!(body.contains(INVALID_CREDENTIALS_MESSAGE));
}

#[test]
fn render_empty_form_has_no_alert() {
    let Html(body) = render(&LoginForm::default()).unwrap();
    assert!(body.contains(r#"action="/login""#));
    assert!(!body.contains("alert-error"));
}
