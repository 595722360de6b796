// Terminal UI implementation using ratatui
// Two screens, two apps: the repository explorer and the issue table

pub mod app;
pub mod issues;
pub mod issues_ui;
pub mod runner;
pub mod ui;

pub use app::{ExplorerApp, InputMode};
pub use issues::IssuesApp;
pub use runner::{run_explorer, run_issues};
