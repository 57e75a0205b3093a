//! Dashboard home page.
//!
//! The overlays (search modal, notifications popover, settings modal) are
//! driven by query parameters so the page works without client script:
//! `?search=<query>`, `?notifications=inbox|archived`, `?settings=open`.

use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use crate::auth::Auth;
use crate::dashboard::home::{Activity, RECENT_ACTIVITY, STAT_CARDS, StatCard};
use crate::dashboard::notifications::{MOCK_NOTIFICATIONS, NotificationTab, NotificationsView};
use crate::dashboard::search::SearchView;
use crate::dashboard::settings::{SETTINGS_CATEGORIES, SETTINGS_PLACEHOLDER, SettingsCategory};
use crate::dashboard::theme::read_preference;
use crate::dashboard::user_menu::UserMenuView;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub search: Option<String>,
    pub notifications: Option<String>,
    pub settings: Option<String>,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    theme: &'static str,
    menu: UserMenuView,
    notifications: NotificationsView,
    notifications_open: bool,
    search: Option<SearchView>,
    settings_open: bool,
    settings: &'static [SettingsCategory],
    settings_placeholder: &'static str,
    stats: &'static [StatCard],
    activity: &'static [Activity],
}

/// `GET /`
pub async fn page(
    State(state): State<AppState>,
    Auth(auth): Auth,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let mode = read_preference(state.storage().as_ref());
    let user = auth.user();
    let tab = query.notifications.as_deref().map(NotificationTab::parse).unwrap_or_default();

    let template = HomeTemplate {
        theme: mode.as_str(),
        menu: UserMenuView::new(user.as_ref(), mode),
        notifications: NotificationsView::new(MOCK_NOTIFICATIONS, tab),
        notifications_open: query.notifications.is_some(),
        search: query.search.as_deref().map(SearchView::new),
        settings_open: query.settings.as_deref() == Some("open"),
        settings: SETTINGS_CATEGORIES,
        settings_placeholder: SETTINGS_PLACEHOLDER,
        stats: STAT_CARDS,
        activity: RECENT_ACTIVITY,
    };
    Ok(Html(template.render()?))
}
