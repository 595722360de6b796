// Explorer screen state and event handling
use gitdeck_core::models::Repository;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Navigating results
    Searching, // Typing in search box
}

/// View state for the repository explorer. The pagination/search state itself
/// lives in [`gitdeck_core::ExplorerSession`]; this is only what the screen
/// needs to draw.
pub struct ExplorerApp {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub search_input: String,
    pub results: Vec<Repository>,
    pub selected_index: usize,
    pub loading: bool,
    pub error_message: Option<String>,
    pub list_state: ListState,
}

impl ExplorerApp {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            results: Vec::new(),
            selected_index: 0,
            loading: false,
            error_message: None,
            list_state,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn enter_search_mode(&mut self) {
        self.input_mode = InputMode::Searching;
    }

    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_result(&mut self) {
        if !self.results.is_empty() {
            self.selected_index = (self.selected_index + 1).min(self.results.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_result(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_repository(&self) -> Option<&Repository> {
        self.results.get(self.selected_index)
    }

    pub fn set_results(&mut self, results: Vec<Repository>) {
        self.results = results;
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl Default for ExplorerApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(i: u64) -> Repository {
        Repository {
            id: i,
            name: format!("repo-{}", i),
            owner: "owner".to_string(),
            avatar_url: String::new(),
            stars: 6000,
            description: None,
            url: String::new(),
            language: None,
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = ExplorerApp::new();
        app.set_results(vec![repo(1), repo(2)]);

        app.next_result();
        app.next_result();
        app.next_result();
        assert_eq!(app.selected_index, 1);

        app.previous_result();
        app.previous_result();
        app.previous_result();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_set_results_resets_cursor() {
        let mut app = ExplorerApp::new();
        app.set_results(vec![repo(1), repo(2), repo(3)]);
        app.next_result();
        app.next_result();

        app.set_results(vec![repo(4)]);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.selected_repository().unwrap().id, 4);
    }
}
