//! Statistics row and per-type breakdown.
//!
//! Both render from the full, unfiltered session list, so flipping filters
//! never changes the numbers.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::App;

/// Render the main statistics row.
pub fn render_summary(app: &App, frame: &mut Frame, area: Rect) {
    let stats = app.session.stats();
    let tiles = [
        ("Total", stats.total, Color::Cyan),
        ("Functional", stats.functional, Color::Green),
        ("Non-Functional", stats.non_functional, Color::Magenta),
        ("High Priority", stats.high_priority, Color::Red),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((label, count, color), chunk) in tiles.iter().zip(chunks.iter()) {
        render_tile(frame, *chunk, label, *count, *color);
    }
}

/// Render the non-functional type breakdown row.
pub fn render_breakdown(app: &App, frame: &mut Frame, area: Rect) {
    let stats = app.session.stats();
    let tiles = [
        ("Performance", stats.performance),
        ("Security", stats.security),
        ("Usability", stats.usability),
        ("Reliability", stats.reliability),
        ("Compatibility", stats.compatibility),
        ("Maintainability", stats.maintainability),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for ((label, count), chunk) in tiles.iter().zip(chunks.iter()) {
        render_tile(frame, *chunk, label, *count, Color::Blue);
    }
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, count: usize, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let line = Line::from(vec![
        Span::styled(
            count.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {label}"), Style::default().fg(Color::Gray)),
    ]);

    let tile = Paragraph::new(line).block(block);
    frame.render_widget(tile, area);
}
