//! Edit form modal.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use casedeck_core::text::{sanitize, truncate};

use crate::tui::app::{EditField, EditModal};

use super::centered_rect;

/// Render the edit form over the main screen.
pub fn render(modal: &EditModal, frame: &mut Frame) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Edit Test Case #{} ", modal.id))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let value_width = inner_area.width.saturating_sub(20) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for field in EditField::ALL {
        let focused = field == modal.focus;

        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        // Multi-line values collapse to one line here; newlines survive the
        // round-trip because editing only appends or pops characters.
        let flat = modal.field_value(field).replace('\n', " / ");
        let mut value = truncate(&sanitize(&flat), value_width);
        if field.is_choice() {
            value = format!("< {value} >");
        } else if focused {
            value.push('_');
        }

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<16}", field.title()), label_style),
            Span::styled(value, value_style),
        ]));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        " [Up/Down] Field  [Left/Right] Change  [Enter] Save  [Esc] Cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let form = Paragraph::new(lines);
    frame.render_widget(form, inner_area);
}
