//! User menu: identity header, account actions, and sign-out.

#[cfg(test)]
#[path = "user_menu_test.rs"]
mod user_menu_test;

use super::theme::ColorMode;
use crate::auth::User;

pub const FALLBACK_USER_NAME: &str = "John Doe";
pub const FALLBACK_USER_EMAIL: &str = "john.doe@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Plain navigation.
    Link(&'static str),
    /// Form post to a state-changing route.
    Post(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
    pub danger: bool,
}

impl MenuItem {
    #[must_use]
    pub fn href(&self) -> &'static str {
        match self.action {
            MenuAction::Link(href) | MenuAction::Post(href) => href,
        }
    }

    #[must_use]
    pub fn is_post(&self) -> bool {
        matches!(self.action, MenuAction::Post(_))
    }
}

/// Menu entries above the separator. The theme entry offers the mode the
/// user is not in.
#[must_use]
pub fn menu_items(mode: ColorMode) -> Vec<MenuItem> {
    let (theme_icon, theme_label) = match mode {
        ColorMode::Dark => ("sun", "Light Mode"),
        ColorMode::Light => ("moon", "Dark Mode"),
    };
    vec![
        MenuItem { id: "profile", icon: "user", label: "My Profile", action: MenuAction::Link("#"), danger: false },
        MenuItem {
            id: "settings",
            icon: "settings",
            label: "Account Settings",
            action: MenuAction::Link("/?settings=open"),
            danger: false,
        },
        MenuItem {
            id: "theme",
            icon: theme_icon,
            label: theme_label,
            action: MenuAction::Post("/preferences/theme"),
            danger: false,
        },
        MenuItem { id: "help", icon: "help", label: "Help & Support", action: MenuAction::Link("#"), danger: false },
    ]
}

pub const SIGN_OUT: MenuItem =
    MenuItem { id: "logout", icon: "log-out", label: "Sign Out", action: MenuAction::Post("/logout"), danger: true };

/// Avatar initials: first letters of the first and last words, upper-cased.
#[must_use]
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.next_back().and_then(|w| w.chars().next());
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}

/// Menu view model for the signed-in user, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMenuView {
    pub name: String,
    pub email: String,
    pub initials: String,
    pub items: Vec<MenuItem>,
    pub sign_out: MenuItem,
}

impl UserMenuView {
    #[must_use]
    pub fn new(user: Option<&User>, mode: ColorMode) -> Self {
        let (name, email) = user.map_or((FALLBACK_USER_NAME, FALLBACK_USER_EMAIL), |u| (u.name.as_str(), u.email.as_str()));
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            initials: initials(name),
            items: menu_items(mode),
            sign_out: SIGN_OUT,
        }
    }
}
