//! Notifications popover data: mock inbox, counts, badge colours, tabs.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

impl NotificationKind {
    /// Colour palette for the avatar badge.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Warning => "orange",
            Self::Success => "green",
            Self::Error => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub kind: NotificationKind,
    pub read: bool,
    pub timestamp: &'static str,
}

impl Notification {
    /// Avatar fallback letter.
    #[must_use]
    pub fn initial(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const MOCK_NOTIFICATIONS: &[Notification] = &[
    Notification {
        id: "1",
        title: "New Risk Assessment",
        message: "A new risk assessment has been submitted for review.",
        kind: NotificationKind::Info,
        read: false,
        timestamp: "5 min ago",
    },
    Notification {
        id: "2",
        title: "Compliance Alert",
        message: "SOC 2 compliance deadline approaching in 7 days.",
        kind: NotificationKind::Warning,
        read: false,
        timestamp: "1 hour ago",
    },
    Notification {
        id: "3",
        title: "Control Updated",
        message: "Access Control policy has been updated successfully.",
        kind: NotificationKind::Success,
        read: true,
        timestamp: "2 hours ago",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationCounts {
    pub unread: usize,
    pub all: usize,
    pub archived: usize,
}

/// Count unread and total notifications. Archiving does not exist yet, so the
/// archived count is always zero.
#[must_use]
pub fn notification_counts(notifications: &[Notification]) -> NotificationCounts {
    NotificationCounts {
        unread: notifications.iter().filter(|n| !n.read).count(),
        all: notifications.len(),
        archived: 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationTab {
    #[default]
    Inbox,
    Archived,
}

impl NotificationTab {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("archived") { Self::Archived } else { Self::Inbox }
    }

    #[must_use]
    pub fn empty_state(self) -> (&'static str, &'static str) {
        match self {
            Self::Inbox => ("No notifications", "You're all caught up! Check back later for updates."),
            Self::Archived => ("No archived notifications", "Archived notifications will appear here."),
        }
    }
}

/// Notifications listed under `tab`. The inbox lists read and unread alike.
#[must_use]
pub fn tab_items(notifications: &[Notification], tab: NotificationTab) -> Vec<Notification> {
    match tab {
        NotificationTab::Inbox => notifications.to_vec(),
        NotificationTab::Archived => Vec::new(),
    }
}

/// Popover view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsView {
    pub tab: NotificationTab,
    pub counts: NotificationCounts,
    pub items: Vec<Notification>,
}

impl NotificationsView {
    #[must_use]
    pub fn new(notifications: &[Notification], tab: NotificationTab) -> Self {
        Self { tab, counts: notification_counts(notifications), items: tab_items(notifications, tab) }
    }

    /// Unread badge text, hidden when nothing is unread.
    #[must_use]
    pub fn unread_badge(&self) -> Option<usize> {
        (self.counts.unread > 0).then_some(self.counts.unread)
    }

    #[must_use]
    pub fn is_archived_tab(&self) -> bool {
        self.tab == NotificationTab::Archived
    }

    #[must_use]
    pub fn empty_title(&self) -> &'static str {
        self.tab.empty_state().0
    }

    #[must_use]
    pub fn empty_description(&self) -> &'static str {
        self.tab.empty_state().1
    }
}
