// Explorer screen rendering
use crate::{ExplorerApp, InputMode};
use gitdeck_core::ExplorerSession;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut ExplorerApp, session: &ExplorerSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Results list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_search_input(frame, app, chunks[1]);
    render_results_list(frame, app, chunks[2]);
    render_status_bar(frame, app, session, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &ExplorerSession, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            "gitdeck explorer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  most starred repositories ("),
        Span::styled(
            session.effective_query(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(")"),
    ]);

    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_search_input(frame: &mut Frame, app: &ExplorerApp, area: Rect) {
    let (style, title) = match app.input_mode {
        InputMode::Searching => (Style::default().fg(Color::Yellow), "Search (Enter to run, Esc to cancel)"),
        InputMode::Normal => (Style::default(), "Search (press / to edit)"),
    };

    let input = Paragraph::new(app.search_input.as_str())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(input, area);

    if app.input_mode == InputMode::Searching {
        frame.set_cursor_position((
            area.x + app.search_input.len() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn render_results_list(frame: &mut Frame, app: &mut ExplorerApp, area: Rect) {
    if app.loading {
        let loading = Paragraph::new("Loading repositories...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL).title("Results"));
        frame.render_widget(loading, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|repo| {
            let mut spans = vec![
                Span::styled(
                    format!("★ {:>7}  ", repo.stars),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    repo.full_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];

            if let Some(lang) = &repo.language {
                spans.push(Span::styled(
                    format!("  [{}]", lang),
                    Style::default().fg(Color::Green),
                ));
            }

            if let Some(desc) = &repo.description {
                spans.push(Span::styled(
                    format!("  {}", desc),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &ExplorerApp, session: &ExplorerSession, area: Rect) {
    let status = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        ))
    } else {
        let state = session.query_state().to_query_string();
        let address = if state.is_empty() {
            String::new()
        } else {
            format!("  ?{}", state)
        };
        Line::from(vec![
            Span::raw(format!(
                "Page {} of {}  ({} repositories){}",
                session.page(),
                session.page_count(),
                session.total_count(),
                address,
            )),
            Span::styled(
                "  |  n/p page · j/k move · / search · Enter open · q quit",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(status), area);
}
