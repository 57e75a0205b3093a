//! Colour mode preference and toggle.
//!
//! Reads the preference from the key-value store and renders it as the
//! `data-theme` attribute on `<html>`. Toggling writes the new mode back.
//!
//! TRADE-OFFS
//! ==========
//! Reading is best-effort: a missing, unknown, or unreadable value renders
//! the light theme rather than failing the page.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::storage::{KeyValueStore, StoreError};

pub const COLOR_MODE_STORAGE_KEY: &str = "grc_color_mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read the stored colour mode, defaulting to light.
#[must_use]
pub fn read_preference(store: &dyn KeyValueStore) -> ColorMode {
    match store.get(COLOR_MODE_STORAGE_KEY) {
        Ok(raw) => raw.as_deref().and_then(ColorMode::parse).unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read colour mode");
            ColorMode::default()
        }
    }
}

/// Flip the stored colour mode and return the new one.
///
/// # Errors
///
/// Returns the storage error if the new mode cannot be written.
pub fn toggle(store: &dyn KeyValueStore) -> Result<ColorMode, StoreError> {
    let next = read_preference(store).toggled();
    store.set(COLOR_MODE_STORAGE_KEY, next.as_str())?;
    Ok(next)
}
