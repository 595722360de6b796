// TUI event loops and terminal management
use crate::{ExplorerApp, InputMode, IssuesApp};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gitdeck_core::ExplorerSession;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn setup_terminal(mouse_enabled: bool) -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Fetch the session's current page into the app, mapping failure to the
/// single generic error line. Stale results stay on screen when a fetch
/// fails.
async fn refresh(app: &mut ExplorerApp, session: &mut ExplorerSession) {
    app.loading = true;
    app.clear_error();

    match session.fetch().await {
        Ok(results) => app.set_results(results.items),
        Err(e) => {
            tracing::warn!("explorer fetch failed: {}", e);
            app.error_message = Some(e.to_string());
        }
    }

    app.loading = false;
}

/// Run the repository explorer screen
pub async fn run_explorer(
    mut app: ExplorerApp,
    mut session: ExplorerSession,
    mouse_enabled: bool,
) -> anyhow::Result<()> {
    // Seed the search box from restored state so editing starts from the
    // shared term, not from scratch
    app.search_input = session.search().to_string();

    let mut terminal = setup_terminal(mouse_enabled)?;

    // Page-load-time fetch: the screen is never empty on arrival
    refresh(&mut app, &mut session).await;

    loop {
        terminal.draw(|f| crate::ui::render(f, &mut app, &session))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match app.input_mode {
                    InputMode::Searching => match key.code {
                        KeyCode::Enter => {
                            // New term, back to page 1
                            session.set_search(app.search_input.clone());
                            app.enter_normal_mode();
                            refresh(&mut app, &mut session).await;
                        }
                        KeyCode::Esc => {
                            app.search_input = session.search().to_string();
                            app.enter_normal_mode();
                        }
                        KeyCode::Char(c) => {
                            app.search_input.push(c);
                        }
                        KeyCode::Backspace => {
                            app.search_input.pop();
                        }
                        _ => {}
                    },
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => {
                            break;
                        }
                        KeyCode::Char('/') => {
                            app.enter_search_mode();
                        }
                        KeyCode::Char('j') | KeyCode::Down => {
                            app.next_result();
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            app.previous_result();
                        }
                        KeyCode::Char('n') | KeyCode::Right => {
                            if session.next_page() {
                                refresh(&mut app, &mut session).await;
                            }
                        }
                        KeyCode::Char('p') | KeyCode::Left => {
                            if session.prev_page() {
                                refresh(&mut app, &mut session).await;
                            }
                        }
                        KeyCode::Enter => {
                            if let Some(repo) = app.selected_repository() {
                                let url = repo.url.clone();
                                if let Err(e) = open::that(&url) {
                                    app.error_message =
                                        Some(format!("Failed to open browser: {}", e));
                                }
                            }
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal(&mut terminal)
}

/// Run the issue table screen. Entirely local state, no fetches.
pub fn run_issues(mut app: IssuesApp, mouse_enabled: bool) -> anyhow::Result<()> {
    let mut terminal = setup_terminal(mouse_enabled)?;

    loop {
        terminal.draw(|f| crate::issues_ui::render(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        break;
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.next_row();
                    }
                    KeyCode::Char('k') | KeyCode::Up => {
                        app.previous_row();
                    }
                    KeyCode::Char(' ') => {
                        app.toggle_current();
                    }
                    KeyCode::Char('a') => {
                        app.toggle_select_all();
                    }
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal(&mut terminal)
}
