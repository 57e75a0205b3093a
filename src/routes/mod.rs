//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page routes run under the auth provider so every handler can reach the
//! mounted context. The routing gate wraps everything, including static files
//! and the health probe, and decides itself which paths it ignores.

pub mod home;
pub mod login;
pub mod session;


use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::provide_auth;
use crate::gate::{LOGOUT_PATH, session_gate};
use crate::state::AppState;

/// Pages that read or change the auth context.
fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home::page))
        .route("/login", get(login::page).post(login::submit))
        .route(LOGOUT_PATH, post(session::logout))
        .route("/preferences/theme", post(session::toggle_theme))
        .layer(middleware::from_fn_with_state(state, provide_auth))
}

/// Full application router.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    page_routes(state.clone())
        .route("/api/health", get(health))
        .route("/favicon.ico", get(favicon))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), session_gate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
