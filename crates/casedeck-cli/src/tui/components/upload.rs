//! Upload panel: drop zone, selected file, and loading presentations.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::tui::app::{App, InputMode, UploadState};

/// Render the upload panel.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let border_style = match app.input_mode {
        InputMode::EnteringPath => Style::default().fg(Color::Yellow),
        InputMode::Normal => Style::default().fg(Color::DarkGray),
    };

    let block = Block::default()
        .title(" Requirement Document ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_area = block.inner(area);

    let lines: Vec<Line> = match &app.upload {
        UploadState::DropZone => {
            if app.input_mode == InputMode::EnteringPath {
                vec![
                    Line::from(Span::styled(
                        "Path to a PDF, DOCX, or TXT file (max 16MB):",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::styled(
                        format!("{}_", app.path_input),
                        Style::default().fg(Color::White),
                    )),
                ]
            } else {
                vec![
                    Line::from(Span::styled(
                        "No document selected.",
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::from(Span::styled(
                        "Press 'i' and type a path to a PDF, DOCX, or TXT file.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            }
        }
        UploadState::Selected(file) => vec![
            Line::from(vec![
                Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    file.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  ({} KB)", file.size / 1024),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
            Line::from(Span::styled(
                "Press 'g' to generate test cases, Backspace to remove.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        UploadState::Loading(file) => vec![
            Line::from(Span::styled(
                format!("Generating test cases from {}...", file.name),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "This can take a while for large documents.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);

    // Show the cursor while a path is being typed
    if app.input_mode == InputMode::EnteringPath {
        let cursor_x = inner_area.x + app.path_input.len() as u16;
        let cursor_y = inner_area.y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}
