//! Settings modal categories. The categories are placeholders; none of them
//! opens a panel yet.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsCategory {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SETTINGS_CATEGORIES: &[SettingsCategory] = &[
    SettingsCategory {
        id: "appearance",
        icon: "palette",
        title: "Appearance",
        description: "Customize theme and display settings",
    },
    SettingsCategory {
        id: "notifications",
        icon: "bell",
        title: "Notifications",
        description: "Manage notification preferences",
    },
    SettingsCategory {
        id: "security",
        icon: "shield",
        title: "Security",
        description: "Two-factor authentication and sessions",
    },
    SettingsCategory {
        id: "language",
        icon: "globe",
        title: "Language & Region",
        description: "Set language and regional preferences",
    },
];

pub const SETTINGS_PLACEHOLDER: &str = "Settings functionality will be implemented in future updates.";
