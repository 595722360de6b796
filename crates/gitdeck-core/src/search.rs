use gitdeck_api::{GitHubClient, GitHubRepo};

use crate::{models::Repository, Error, Result};

/// One page of search results plus the upstream total, which drives the
/// pagination math in [`crate::explorer`].
#[derive(Debug, Clone)]
pub struct SearchPage {
    pub items: Vec<Repository>,
    pub total_count: u64,
}

/// Trait for search backends - makes testing easier and keeps things flexible
///
/// The explorer only ever talks to this, so tests can swap in a mock instead
/// of hammering the real API.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage>;
}

/// Wrapper around GitHubClient that implements SearchBackend
pub struct GitHubBackend {
    client: GitHubClient,
}

impl GitHubBackend {
    pub fn new() -> Self {
        Self {
            client: GitHubClient::new(),
        }
    }

    pub fn with_client(client: GitHubClient) -> Self {
        Self { client }
    }
}

impl Default for GitHubBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SearchBackend for GitHubBackend {
    async fn search(&self, query: &str, page: u32, per_page: u32) -> Result<SearchPage> {
        let response = self
            .client
            .search_repositories(query, page, per_page)
            .await
            .map_err(|e| Error::FetchError(e.to_string()))?;

        Ok(SearchPage {
            total_count: response.total_count,
            items: response.items.into_iter().map(github_to_repo).collect(),
        })
    }
}

/// Convert GitHub API repo to our internal Repository model
fn github_to_repo(gh: GitHubRepo) -> Repository {
    Repository {
        id: gh.id,
        name: gh.name,
        owner: gh.owner.login,
        avatar_url: gh.owner.avatar_url,
        stars: gh.stargazers_count,
        description: gh.description,
        url: gh.html_url,
        language: gh.language,
    }
}
