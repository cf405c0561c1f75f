//! Transient toast notification.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use casedeck_core::text::{sanitize, truncate};

use crate::tui::app::Toast;

/// Render the toast in the bottom-right corner, above the status bar.
pub fn render(toast: &Toast, frame: &mut Frame) {
    let area = frame.area();

    let message = truncate(&sanitize(&toast.message), area.width.saturating_sub(8) as usize);
    let width = (message.chars().count() as u16 + 4).min(area.width);
    let height = 3;

    let rect = Rect {
        x: area.width.saturating_sub(width + 1),
        y: area.height.saturating_sub(height + 1),
        width,
        height,
    };

    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(Color::White),
    )))
    .block(block);

    frame.render_widget(paragraph, rect);
}
