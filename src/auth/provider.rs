//! Per-request auth provider and the `use_auth` accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_auth` is the page router's middleware: it mounts an
//! [`AuthContext`] from the shared session store and the request cookies,
//! places it in the request extensions for handlers, and writes the context's
//! cookie changes onto whatever response comes back.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::Extensions;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::context::AuthContext;
use crate::state::AppState;

const MISSING_PROVIDER: &str = "use_auth must be used within an AuthProvider";

/// Mount an auth context for this request.
pub async fn provide_auth(State(state): State<AppState>, jar: CookieJar, mut req: Request, next: Next) -> Response {
    let auth = AuthContext::mount(state.session.clone(), state.verifier.clone(), jar);
    req.extensions_mut().insert(auth.clone());

    let response = next.run(req).await;
    (auth.cookie_jar(), response).into_response()
}

/// Fetch the mounted auth context.
///
/// # Panics
///
/// Panics when no provider mounted a context for these extensions. That is a
/// wiring bug in the router, not a request-level condition.
#[must_use]
pub fn use_auth(extensions: &Extensions) -> AuthContext {
    let Some(auth) = extensions.get::<AuthContext>() else {
        panic!("{MISSING_PROVIDER}");
    };
    auth.clone()
}

/// Handler extractor wrapping [`use_auth`].
pub struct Auth(pub AuthContext);

impl<S> FromRequestParts<S> for Auth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(use_auth(&parts.extensions)))
    }
}
