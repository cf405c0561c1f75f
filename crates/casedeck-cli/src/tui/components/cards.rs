//! Test-case card grid.
//!
//! Every piece of server-supplied text goes through `sanitize` before it
//! reaches the frame, so a hostile field cannot inject terminal control
//! sequences.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use casedeck_core::text::sanitize;
use casedeck_core::{PriorityLevel, TestCase};

use crate::tui::app::App;

/// Render the card grid.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let visible = app.session.visible();

    let block = Block::default()
        .title(format!(" Test Cases ({}) ", visible.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        let placeholder = Paragraph::new(
            "No test cases yet. Upload a requirement document to get started!",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner_area);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|case| card_item(case)).collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)))
        .highlight_symbol("");

    let selected = app.selected.min(visible.len() - 1);
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, inner_area, &mut state);
}

/// Build one card: title line with badges, then the field sections.
/// Optional sections are omitted entirely when the field is absent or empty.
fn card_item(case: &TestCase) -> ListItem<'static> {
    let priority_style = match case.priority_level() {
        Some(PriorityLevel::High) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Some(PriorityLevel::Medium) => Style::default().fg(Color::Yellow),
        Some(PriorityLevel::Low) => Style::default().fg(Color::Green),
        None => Style::default().fg(Color::Gray),
    };

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled(
            sanitize(&case.test_case_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format!("[{}]", sanitize(&case.priority)), priority_style),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", sanitize(&case.test_type)),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    if case.has_description() {
        push_section(
            &mut lines,
            "Description",
            case.description.as_deref().unwrap_or_default(),
        );
    }
    if case.has_preconditions() {
        push_section(
            &mut lines,
            "Preconditions",
            case.preconditions.as_deref().unwrap_or_default(),
        );
    }
    push_section(&mut lines, "Test Steps", &case.test_steps);
    push_section(&mut lines, "Expected Result", &case.expected_result);
    lines.push(Line::raw(""));

    ListItem::new(lines)
}

fn push_section(lines: &mut Vec<Line<'static>>, label: &str, text: &str) {
    lines.push(Line::from(Span::styled(
        format!("  {label}"),
        Style::default().fg(Color::Yellow),
    )));
    for line in sanitize(text).lines() {
        lines.push(Line::from(Span::styled(
            format!("    {line}"),
            Style::default().fg(Color::Gray),
        )));
    }
}
