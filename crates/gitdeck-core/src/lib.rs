// Core business logic lives here - the brain of the operation
pub mod config;
pub mod error;
pub mod explorer;
pub mod issues;
pub mod models;
pub mod query_state;
pub mod search;
pub mod selection;

pub use config::Config;
pub use error::Error;
pub use explorer::ExplorerSession;
pub use query_state::QueryState;
pub use search::{GitHubBackend, SearchBackend, SearchPage};
pub use selection::{checkbox_state, CheckboxState, SelectionState};

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
