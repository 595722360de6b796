// Issue table screen state
use gitdeck_core::{models::Issue, SelectionState};
use ratatui::widgets::TableState;

/// View state for the issue table. Issues are loaded once and never change;
/// the only mutable thing here is the selection and the row cursor.
pub struct IssuesApp {
    pub should_quit: bool,
    pub issues: Vec<Issue>,
    pub selection: SelectionState,
    pub cursor: usize,
    pub table_state: TableState,
}

impl IssuesApp {
    pub fn new(issues: Vec<Issue>) -> Self {
        let selection = SelectionState::new(&issues);
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            should_quit: false,
            issues,
            selection,
            cursor: 0,
            table_state,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn next_row(&mut self) {
        if !self.issues.is_empty() {
            self.cursor = (self.cursor + 1).min(self.issues.len() - 1);
            self.table_state.select(Some(self.cursor));
        }
    }

    pub fn previous_row(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.table_state.select(Some(self.cursor));
        }
    }

    pub fn current_issue(&self) -> Option<&Issue> {
        self.issues.get(self.cursor)
    }

    /// Toggle the row under the cursor. Resolved rows are disabled in the
    /// UI, so this is a no-op for them.
    pub fn toggle_current(&mut self) {
        if let Some(issue) = self.issues.get(self.cursor) {
            if issue.is_open() {
                let id = issue.id.clone();
                self.selection.toggle(&id);
            }
        }
    }

    /// Drive the select-all control: check when not everything is selected,
    /// clear when it is.
    pub fn toggle_select_all(&mut self) {
        let checked = !self.selection.all_open_selected();
        self.selection.select_all(checked);
    }
}
