//! Selection state for the issue table.
//!
//! Only open issues are selectable. The selection set is keyed by issue id
//! and the open-id universe is fixed at construction, so a resolved issue
//! can never sneak into the set no matter what the caller does.

use std::collections::HashSet;

use crate::models::Issue;

/// What the select-all checkbox should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Checked,
    Unchecked,
    Indeterminate,
}

/// Tri-state derivation as a pure function over the two counts. Deriving
/// instead of storing flags means the checkbox can never disagree with the
/// selection set.
pub fn checkbox_state(selected_count: usize, open_count: usize) -> CheckboxState {
    if open_count > 0 && selected_count == open_count {
        CheckboxState::Checked
    } else if selected_count > 0 && selected_count < open_count {
        CheckboxState::Indeterminate
    } else {
        CheckboxState::Unchecked
    }
}

/// Tracks which open issues are selected. Purely in-memory, no side effects.
pub struct SelectionState {
    // Insertion order of open ids, for deterministic select-all
    open_ids: Vec<String>,
    selected: HashSet<String>,
}

impl SelectionState {
    pub fn new(issues: &[Issue]) -> Self {
        Self {
            open_ids: issues
                .iter()
                .filter(|issue| issue.is_open())
                .map(|issue| issue.id.clone())
                .collect(),
            selected: HashSet::new(),
        }
    }

    /// Flip membership of an id. Ids outside the open universe are ignored;
    /// the presentation layer disables those rows anyway.
    pub fn toggle(&mut self, id: &str) {
        if !self.open_ids.iter().any(|open| open == id) {
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// All-or-nothing bulk action: select every open issue or clear the set.
    pub fn select_all(&mut self, checked: bool) {
        if checked {
            self.selected = self.open_ids.iter().cloned().collect();
        } else {
            self.selected.clear();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn total_selected(&self) -> usize {
        self.selected.len()
    }

    pub fn open_count(&self) -> usize {
        self.open_ids.len()
    }

    pub fn all_open_selected(&self) -> bool {
        self.open_count() > 0 && self.total_selected() == self.open_count()
    }

    pub fn some_selected(&self) -> bool {
        self.total_selected() > 0 && self.total_selected() < self.open_count()
    }

    /// State of the header select-all checkbox
    pub fn select_all_checkbox(&self) -> CheckboxState {
        checkbox_state(self.total_selected(), self.open_count())
    }
}
