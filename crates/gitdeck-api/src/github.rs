use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fetch failures are deliberately flat: a non-success status and a dead
/// socket look the same to callers, which either show a loading state or
/// give up. No retry, no rate-limit special-casing.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("fetch failed: status {0}")]
    Status(reqwest::StatusCode),

    #[error("fetch failed: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string())
    }

    /// For GitHub Enterprise or testing with a custom API URL
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("gitdeck/0.1.0"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Search repositories, sorted by stars descending.
    ///
    /// `query` is the full search expression (the star-count qualifier is the
    /// caller's business, see gitdeck-core). One page per call; GitHub caps
    /// the search result window at 1000 items so pages past 34 never exist.
    pub async fn search_repositories(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchResponse> {
        let url = format!("{}/search/repositories", self.base_url);

        debug!(query, page, per_page, "searching repositories");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", &per_page.to_string()),
                ("page", &page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubError::Status(status));
        }

        let results: SearchResponse = response.json().await?;
        Ok(results)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub repository search response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<GitHubRepo>,
}

/// GitHub repository representation (the fields we actually render)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub owner: Owner,
    pub stargazers_count: u32,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new();
        assert_eq!(client.base_url, GITHUB_API_BASE);
    }

    #[test]
    fn test_client_with_custom_base_url() {
        let client = GitHubClient::with_base_url("https://ghe.example.com/api/v3".to_string());
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "total_count": 12345,
            "incomplete_results": false,
            "items": [
                {
                    "id": 10270250,
                    "name": "react",
                    "owner": { "login": "facebook", "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4" },
                    "stargazers_count": 230000,
                    "description": "The library for web and native user interfaces.",
                    "html_url": "https://github.com/facebook/react",
                    "language": "JavaScript"
                }
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_count, 12345);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].name, "react");
        assert_eq!(response.items[0].owner.login, "facebook");
    }

    #[test]
    fn test_repo_with_missing_optional_fields() {
        // description and language come back null often enough
        let json = r#"{
            "id": 1,
            "name": "thing",
            "owner": { "login": "someone", "avatar_url": "https://example.com/a.png" },
            "stargazers_count": 6000,
            "description": null,
            "html_url": "https://github.com/someone/thing"
        }"#;

        let repo: GitHubRepo = serde_json::from_str(json).unwrap();
        assert!(repo.description.is_none());
        assert!(repo.language.is_none());
    }
}
