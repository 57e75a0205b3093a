//! Sign-out and colour mode form posts.

use axum::extract::State;
use axum::response::Redirect;

use crate::auth::Auth;
use crate::dashboard::theme;
use crate::error::AppError;
use crate::gate::{HOME_PATH, LOGIN_PATH};
use crate::state::AppState;

/// `POST /logout`
pub async fn logout(Auth(auth): Auth) -> Redirect {
    auth.logout();
    tracing::info!("signed out");
    Redirect::to(LOGIN_PATH)
}

/// `POST /preferences/theme`
pub async fn toggle_theme(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mode = theme::toggle(state.storage().as_ref())?;
    tracing::debug!(mode = mode.as_str(), "colour mode toggled");
    Ok(Redirect::to(HOME_PATH))
}
