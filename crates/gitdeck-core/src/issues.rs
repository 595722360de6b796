//! Issue fixture loading. The list is read once at startup and treated as
//! immutable from then on; there is no re-read and no persistence.

use std::path::Path;

use crate::{models::Issue, Result};

/// The bundled fixture, compiled into the binary
pub const BUILTIN_FIXTURE: &str = include_str!("../fixtures/issues.json");

/// Load the bundled fixture
pub fn load_builtin() -> Result<Vec<Issue>> {
    from_str(BUILTIN_FIXTURE)
}

/// Parse a JSON array of issue records
pub fn from_str(json: &str) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(json)?;
    Ok(issues)
}

/// Load issues from a JSON file on disk
pub fn from_path(path: &Path) -> Result<Vec<Issue>> {
    let contents = std::fs::read_to_string(path)?;
    from_str(&contents)
}
