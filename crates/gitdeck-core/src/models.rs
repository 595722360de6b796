use serde::{Deserialize, Serialize};

/// Repository model - the star of the show
///
/// Flattened from the upstream API shape down to the fields we render.
/// Fetched fresh per query, never mutated, replaced wholesale on the next
/// fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub avatar_url: String,
    pub stars: u32,
    pub description: Option<String>,
    pub url: String,
    pub language: Option<String>,
}

impl Repository {
    /// `owner/name`, the way everyone refers to a repo anyway
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Issue record from the bundled fixture. Loaded once, immutable for the
/// process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub name: String,
    pub message: String,
    pub status: IssueStatus,
    pub num_events: u32,
    pub num_users: u32,
    pub value: u32,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.status == IssueStatus::Open
    }
}

/// The two lifecycle states an issue can be in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Resolved,
}

impl std::fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueStatus::Open => write!(f, "Open"),
            IssueStatus::Resolved => write!(f, "Resolved"),
        }
    }
}
