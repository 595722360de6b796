// Issue table rendering
use crate::IssuesApp;
use gitdeck_core::CheckboxState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render(frame: &mut Frame, app: &mut IssuesApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Selection header
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_selection_header(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_status_bar(frame, chunks[2]);
}

/// The tri-state select-all control rendered as text: checked, unchecked,
/// or indeterminate when only part of the open issues is selected.
fn checkbox_symbol(state: CheckboxState) -> &'static str {
    match state {
        CheckboxState::Checked => "[x]",
        CheckboxState::Unchecked => "[ ]",
        CheckboxState::Indeterminate => "[~]",
    }
}

fn render_selection_header(frame: &mut Frame, app: &IssuesApp, area: Rect) {
    let selected = app.selection.total_selected();
    let label = if selected > 0 {
        format!("Selected {}", selected)
    } else {
        "None selected".to_string()
    };

    let line = Line::from(vec![
        Span::styled(
            checkbox_symbol(app.selection.select_all_checkbox()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(label),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Issue Tracker"),
    );
    frame.render_widget(header, area);
}

fn render_table(frame: &mut Frame, app: &mut IssuesApp, area: Rect) {
    let header = Row::new(vec!["", "Name", "Message", "Status", "Events", "Users"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .issues
        .iter()
        .map(|issue| {
            let open = issue.is_open();
            let checkbox = if !open {
                Cell::from(" - ").style(Style::default().fg(Color::DarkGray))
            } else if app.selection.is_selected(&issue.id) {
                Cell::from("[x]").style(Style::default().fg(Color::Blue))
            } else {
                Cell::from("[ ]")
            };

            let status_style = if open {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let row_style = if open {
                Style::default()
            } else {
                // resolved rows are visibly disabled
                Style::default().fg(Color::DarkGray)
            };

            Row::new(vec![
                checkbox,
                Cell::from(issue.name.clone()),
                Cell::from(issue.message.clone()),
                Cell::from(Span::styled(issue.status.to_string(), status_style)),
                Cell::from(issue.num_events.to_string()),
                Cell::from(issue.num_users.to_string()),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(22),
            Constraint::Min(30),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Span::styled(
        "Space toggle · a select all · j/k move · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, area);
}
