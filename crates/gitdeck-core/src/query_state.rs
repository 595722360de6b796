//! The shareable address of an explorer view.
//!
//! `(page, search)` serializes to a `page=N&search=TERM` query string and
//! back. Defaults are omitted on the way out and assumed on the way in, so
//! the default view serializes to the empty string and any junk deserializes
//! to something usable.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub page: u32,
    pub search: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
        }
    }
}

impl QueryState {
    pub fn new(page: u32, search: String) -> Self {
        Self {
            page: page.max(1),
            search,
        }
    }

    /// Serialize, omitting defaults. The default state is the empty string.
    pub fn to_query_string(&self) -> String {
        let mut parts = Vec::new();
        if self.page != 1 {
            parts.push(format!("page={}", self.page));
        }
        if !self.search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        parts.join("&")
    }

    /// Lenient parse: unknown keys are ignored, a missing or unparseable
    /// page means page 1, a missing search means empty.
    pub fn parse(input: &str) -> Self {
        let mut state = Self::default();

        for pair in input.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "page" => {
                    state.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "search" => {
                    state.search = urlencoding::decode(value)
                        .map(|s| s.into_owned())
                        .unwrap_or_default();
                }
                _ => {}
            }
        }

        state
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_to_empty() {
        assert_eq!(QueryState::default().to_query_string(), "");
    }

    #[test]
    fn test_roundtrip() {
        let state = QueryState::new(2, "rust".to_string());
        let qs = state.to_query_string();
        assert_eq!(qs, "page=2&search=rust");
        assert_eq!(QueryState::parse(&qs), state);
    }

    #[test]
    fn test_search_term_is_percent_encoded() {
        let state = QueryState::new(1, "machine learning".to_string());
        let qs = state.to_query_string();
        assert_eq!(qs, "search=machine%20learning");
        assert_eq!(QueryState::parse(&qs).search, "machine learning");
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!(QueryState::parse(""), QueryState::default());
        assert_eq!(QueryState::parse("?page=3").page, 3);
        assert_eq!(QueryState::parse("page=zero").page, 1);
        assert_eq!(QueryState::parse("page=0").page, 1);
        assert_eq!(QueryState::parse("utm_source=feed&page=2").page, 2);
        assert_eq!(QueryState::parse("search").search, "");
    }

    #[test]
    fn test_parse_order_does_not_matter() {
        let state = QueryState::parse("search=tokio&page=5");
        assert_eq!(state.page, 5);
        assert_eq!(state.search, "tokio");
    }
}
