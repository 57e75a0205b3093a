//! Dashboard shell content: topbar widgets and home-page mock data.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is presentational. Data comes from fixed arrays and is
//! filtered in memory; only the colour mode touches storage.

pub mod home;
pub mod notifications;
pub mod search;
pub mod settings;
pub mod theme;
pub mod user_menu;
