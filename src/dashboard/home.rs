//! Home page mock content.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Up => "green",
            Self::Down => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const STAT_CARDS: &[StatCard] = &[
    StatCard { label: "Total Risks", value: "42", change: "+12% from last month", trend: Trend::Up },
    StatCard { label: "Active Controls", value: "156", change: "+5% from last month", trend: Trend::Up },
    StatCard { label: "Compliance Score", value: "87%", change: "+3% from last month", trend: Trend::Up },
    StatCard { label: "Open Issues", value: "8", change: "-2 from last month", trend: Trend::Down },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub user: &'static str,
    pub time: &'static str,
}

pub const RECENT_ACTIVITY: &[Activity] = &[
    Activity { action: "Risk assessment submitted", user: "John Doe", time: "2 hours ago" },
    Activity { action: "Control updated", user: "Jane Smith", time: "4 hours ago" },
    Activity { action: "Compliance report generated", user: "Mike Johnson", time: "6 hours ago" },
    Activity { action: "New policy approved", user: "Sarah Williams", time: "1 day ago" },
];
