//! Routing gate: cookie-only allow/redirect decisions ahead of every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs as the outermost router middleware, before any page renders. It sees
//! the request path and the session marker cookie and nothing else. The
//! profile record is invisible here, so a stale cookie passes the gate until
//! the next page mount expires it.
//!
//! TRADE-OFFS
//! ==========
//! The marker carries no claims and is trusted on presence alone. This is a
//! demo placeholder; a real deployment replaces it with a server-verified
//! session token.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use url::form_urlencoded;

use crate::auth::session::session_marker;
use crate::state::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const LOGOUT_PATH: &str = "/logout";
pub const RETURN_TARGET_PARAM: &str = "from";

/// Prefixes the gate is never mounted on.
const UNMATCHED_PREFIXES: &[&str] = &["/_next/static", "/_next/image", "/favicon.ico", "/public"];
/// Prefixes the gate lets through without looking at the cookie.
const EXCLUDED_PREFIXES: &[&str] = &["/_next", "/api", "/favicon.ico", "/static"];
/// Exact paths that always reach their handler. Sign-out must clear the
/// stored profile even when the cookie is already gone.
const OPEN_PATHS: &[&str] = &[LOGOUT_PATH];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(String),
}

/// Path rules for the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGate {
    pub login_path: &'static str,
    pub home_path: &'static str,
    pub unmatched_prefixes: &'static [&'static str],
    pub excluded_prefixes: &'static [&'static str],
    pub open_paths: &'static [&'static str],
}

impl Default for RouteGate {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH,
            home_path: HOME_PATH,
            unmatched_prefixes: UNMATCHED_PREFIXES,
            excluded_prefixes: EXCLUDED_PREFIXES,
            open_paths: OPEN_PATHS,
        }
    }
}

impl RouteGate {
    /// Whether the gate applies to `path` at all.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        !self.unmatched_prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    /// Decide what to do with a request for `path`.
    ///
    /// `session_cookie` is the raw marker value; `None` and `Some("")` both
    /// mean signed out.
    #[must_use]
    pub fn evaluate(&self, path: &str, session_cookie: Option<&str>) -> GateDecision {
        if !self.matches(path)
            || self.excluded_prefixes.iter().any(|prefix| path.starts_with(prefix))
            || self.open_paths.iter().any(|open| *open == path)
        {
            return GateDecision::Allow;
        }

        let is_public = path == self.login_path;
        let is_authenticated = session_cookie.is_some_and(|value| !value.is_empty());

        match (is_public, is_authenticated) {
            (true, true) => GateDecision::Redirect(self.home_path.to_owned()),
            (false, false) => GateDecision::Redirect(self.login_redirect(path)),
            _ => GateDecision::Allow,
        }
    }

    /// Login URL carrying `path` as the return target.
    #[must_use]
    pub fn login_redirect(&self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(RETURN_TARGET_PARAM, path)
            .finish();
        format!("{}?{query}", self.login_path)
    }
}

/// Redirect that keeps page navigations as `307` and turns form posts into
/// `303`, so the browser follows with a `GET` instead of replaying the body.
#[must_use]
pub fn redirect_for(method: &Method, target: &str) -> Redirect {
    if *method == Method::GET || *method == Method::HEAD {
        Redirect::temporary(target)
    } else {
        Redirect::to(target)
    }
}

/// Router middleware applying [`RouteGate::evaluate`] to every request.
pub async fn session_gate(State(state): State<AppState>, jar: CookieJar, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    match state.gate.evaluate(path, session_marker(&jar)) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Redirect(target) => {
            tracing::debug!(%path, %target, method = %req.method(), "gate redirect");
            redirect_for(req.method(), &target).into_response()
        }
    }
}
