// API client for the upstream repository search endpoint
pub mod github;

// Re-export common types
pub use github::{GitHubClient, GitHubError, GitHubRepo, Owner, SearchResponse};
