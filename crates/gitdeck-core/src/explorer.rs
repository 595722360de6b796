//! Search/pagination controller for the repository explorer.
//!
//! Pagination is plain arithmetic over the upstream total: a fixed page size
//! of 30 and a hard page cap of 34, because the upstream search API refuses
//! to serve results past the first 1000.

use crate::{
    query_state::QueryState,
    search::{SearchBackend, SearchPage},
    Result,
};
use tracing::debug;

/// Fixed page size; the upstream endpoint is always asked for exactly this many.
pub const PER_PAGE: u32 = 30;

/// Highest reachable page. 34 * 30 > 1000, the upstream result-window limit.
pub const MAX_PAGE: u32 = 34;

/// Star-count qualifier appended to every query
pub const MIN_STARS_QUALIFIER: &str = "stars:>5000";

/// Effective query: the user's term plus the star filter, or the filter alone.
pub fn build_query(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        MIN_STARS_QUALIFIER.to_string()
    } else {
        format!("{} {}", term, MIN_STARS_QUALIFIER)
    }
}

/// Is there anything past `page`? True only while the next page would still
/// land inside both the result set and the upstream window.
pub fn has_next_page(page: u32, total_count: u64) -> bool {
    (page as u64) * (PER_PAGE as u64) < total_count && page < MAX_PAGE
}

/// Total pages for a result set, clamped to the reachable window. Never zero,
/// so "page 1 of 1" renders sensibly for empty results.
pub fn page_count(total_count: u64) -> u32 {
    let per_page = PER_PAGE as u64;
    let pages = (total_count + per_page - 1) / per_page;
    (pages.min(MAX_PAGE as u64) as u32).max(1)
}

/// Owns the current (page, search term) pair and the backend that resolves it.
///
/// The session is the single mutable home for explorer state; the total count
/// from the latest fetch is kept so page navigation can be bounds-checked
/// without another round trip.
pub struct ExplorerSession {
    backend: Box<dyn SearchBackend>,
    page: u32,
    search: String,
    total_count: u64,
}

impl ExplorerSession {
    pub fn new(backend: Box<dyn SearchBackend>) -> Self {
        Self::with_state(backend, &QueryState::default())
    }

    /// Restore a session from a shared query-string state
    pub fn with_state(backend: Box<dyn SearchBackend>, state: &QueryState) -> Self {
        Self {
            backend,
            page: state.page.clamp(1, MAX_PAGE),
            search: state.search.clone(),
            total_count: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn effective_query(&self) -> String {
        build_query(&self.search)
    }

    /// The shareable address of the current view
    pub fn query_state(&self) -> QueryState {
        QueryState::new(self.page, self.search.clone())
    }

    /// Changing the search term always lands you back on page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn has_next(&self) -> bool {
        has_next_page(self.page, self.total_count)
    }

    pub fn page_count(&self) -> u32 {
        page_count(self.total_count)
    }

    /// Advance one page if there is one. Returns whether we moved.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Back one page, flooring at 1. Returns whether we moved.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Fetch the current page. Failures propagate unchanged - no retry, no
    /// partial results; the caller decides what to show in the meantime.
    pub async fn fetch(&mut self) -> Result<SearchPage> {
        let query = self.effective_query();
        debug!(page = self.page, %query, "fetching explorer page");

        let results = self.backend.search(&query, self.page, PER_PAGE).await?;
        self.total_count = results.total_count;
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MockSearchBackend;
    use crate::Error;

    fn page_of(n: usize, total: u64) -> SearchPage {
        SearchPage {
            items: (0..n)
                .map(|i| crate::models::Repository {
                    id: i as u64,
                    name: format!("repo-{}", i),
                    owner: "owner".to_string(),
                    avatar_url: String::new(),
                    stars: 6000,
                    description: None,
                    url: format!("https://github.com/owner/repo-{}", i),
                    language: None,
                })
                .collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_build_query_includes_star_filter() {
        assert_eq!(build_query(""), "stars:>5000");
        assert_eq!(build_query("  "), "stars:>5000");
        assert_eq!(build_query("tensorflow"), "tensorflow stars:>5000");
    }

    #[test]
    fn test_has_next_page_boundaries() {
        // total_count=100: 1*30 < 100, but 4*30 = 120 > 100
        assert!(has_next_page(1, 100));
        assert!(has_next_page(3, 100));
        assert!(!has_next_page(4, 100));

        // page 34 is the hard cap no matter how huge the total is
        assert!(has_next_page(33, u64::MAX));
        assert!(!has_next_page(34, u64::MAX));
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(30), 1);
        assert_eq!(page_count(31), 2);
        assert_eq!(page_count(100), 4);
        assert_eq!(page_count(5_000_000), 34);
    }

    #[test]
    fn test_set_search_resets_page() {
        let mut session = ExplorerSession::with_state(
            Box::new(MockSearchBackend::new()),
            &QueryState::new(7, "rust".to_string()),
        );
        assert_eq!(session.page(), 7);

        session.set_search("tokio");
        assert_eq!(session.page(), 1);
        assert_eq!(session.search(), "tokio");
    }

    #[test]
    fn test_with_state_clamps_page() {
        let session = ExplorerSession::with_state(
            Box::new(MockSearchBackend::new()),
            &QueryState::new(999, String::new()),
        );
        assert_eq!(session.page(), MAX_PAGE);
    }

    #[tokio::test]
    async fn test_fetch_uses_effective_query_and_fixed_page_size() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .withf(|query, page, per_page| {
                query == "react stars:>5000" && *page == 1 && *per_page == 30
            })
            .times(1)
            .returning(|_, _, _| Ok(page_of(30, 100)));

        let mut session = ExplorerSession::new(Box::new(backend));
        session.set_search("react");

        let results = session.fetch().await.unwrap();
        assert_eq!(results.items.len(), 30);
        assert_eq!(session.total_count(), 100);
        assert!(session.has_next());
    }

    #[tokio::test]
    async fn test_pagination_stops_at_total() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, _, _| Ok(page_of(10, 100)));

        let mut session = ExplorerSession::new(Box::new(backend));
        session.fetch().await.unwrap();

        // 100 items / 30 per page = pages 1..=4
        assert!(session.next_page());
        assert!(session.next_page());
        assert!(session.next_page());
        assert_eq!(session.page(), 4);
        assert!(!session.next_page());
        assert_eq!(session.page(), 4);

        assert!(session.prev_page());
        assert_eq!(session.page(), 3);
    }

    #[tokio::test]
    async fn test_prev_page_floors_at_one() {
        let mut session = ExplorerSession::new(Box::new(MockSearchBackend::new()));
        assert!(!session.prev_page());
        assert_eq!(session.page(), 1);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_unchanged() {
        let mut backend = MockSearchBackend::new();
        backend
            .expect_search()
            .returning(|_, _, _| Err(Error::FetchError("status 403 Forbidden".to_string())));

        let mut session = ExplorerSession::new(Box::new(backend));
        let err = session.fetch().await.unwrap_err();
        assert!(matches!(err, Error::FetchError(_)));
        // a failed fetch must not invent a total
        assert_eq!(session.total_count(), 0);
        assert!(!session.has_next());
    }
}
