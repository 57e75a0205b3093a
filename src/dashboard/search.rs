//! Search modal results.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    Recent,
    Page,
    Action,
}

impl ResultKind {
    /// Icon shown beside a result: a clock for recent searches, a file
    /// otherwise.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Recent => "clock",
            Self::Page | Self::Action => "file",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ResultKind,
    pub description: Option<&'static str>,
}

impl SearchResult {
    fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

const fn result(id: &'static str, title: &'static str, kind: ResultKind, description: &'static str) -> SearchResult {
    SearchResult { id, title, kind, description: Some(description) }
}

pub const RECENT_SEARCHES: &[SearchResult] = &[
    result("1", "Risk Assessment", ResultKind::Recent, "View risk assessments"),
    result("2", "Compliance Reports", ResultKind::Recent, "Generate reports"),
    result("3", "User Management", ResultKind::Recent, "Manage users"),
];

pub const PAGES: &[SearchResult] = &[
    result("4", "Dashboard", ResultKind::Page, "Main dashboard view"),
    result("5", "Risk Register", ResultKind::Page, "All registered risks"),
    result("6", "Controls Library", ResultKind::Page, "Security controls"),
    result("7", "Audit Logs", ResultKind::Page, "System audit trails"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub recent: Vec<SearchResult>,
    pub pages: Vec<SearchResult>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.pages.is_empty()
    }
}

/// Filter `recent` and `pages` by a case-insensitive substring of title or
/// description. A blank query shows every recent search and no pages.
#[must_use]
pub fn filter_search_results(query: &str, recent: &[SearchResult], pages: &[SearchResult]) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults { recent: recent.to_vec(), pages: Vec::new() };
    }

    let keep = |items: &[SearchResult]| -> Vec<SearchResult> {
        items.iter().filter(|item| item.matches(&needle)).cloned().collect()
    };
    SearchResults { recent: keep(recent), pages: keep(pages) }
}

/// Open search modal state for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub query: String,
    pub results: SearchResults,
}

impl SearchView {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self { query: query.to_owned(), results: filter_search_results(query, RECENT_SEARCHES, PAGES) }
    }

    #[must_use]
    pub fn recent_heading(&self) -> &'static str {
        if self.query.is_empty() { "Recent Searches" } else { "Matching Recent" }
    }

    /// Empty-state text, shown only for a non-empty query with no hits.
    #[must_use]
    pub fn no_results_message(&self) -> Option<String> {
        (!self.query.is_empty() && self.results.is_empty()).then(|| format!("No results found for \"{}\"", self.query))
    }
}
