//! Filter bar. Purely client-side: switching filters issues no request.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::tui::app::{App, FILTER_CHOICES};

/// Render the filter bar.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let titles: Vec<&str> = FILTER_CHOICES.to_vec();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Filter ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(app.filter_index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");

    frame.render_widget(tabs, area);
}
