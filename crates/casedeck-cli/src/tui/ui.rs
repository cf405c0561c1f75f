//! UI rendering for the TUI.

use ratatui::{prelude::*, widgets::Paragraph};

use super::app::{App, InputMode, UploadState};
use super::components::{cards, confirm, filter_bar, modal, stats, toast, upload};

/// Render the entire UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Main layout: header, upload panel, content, status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(5), // Upload panel
            Constraint::Min(8),    // Stats + card grid
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    upload::render(app, frame, chunks[1]);
    render_main_content(app, frame, chunks[2]);
    render_status_bar(app, frame, chunks[3]);

    // Overlays, in stacking order
    if let Some(edit) = &app.modal {
        modal::render(edit, frame);
    }
    if let Some(action) = &app.confirm {
        confirm::render(*action, frame);
    }
    if let Some(message) = &app.toast {
        toast::render(message, frame);
    }
}

/// Render stats, breakdown, filter bar, and the card grid.
///
/// The stats/breakdown/filter rows appear only while cases exist; an empty
/// session gives the whole area to the grid's placeholder.
fn render_main_content(app: &App, frame: &mut Frame, area: Rect) {
    if app.session.is_empty() {
        cards::render(app, frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stats
            Constraint::Length(3), // Type breakdown
            Constraint::Length(3), // Filter bar
            Constraint::Min(5),    // Card grid
        ])
        .split(area);

    stats::render_summary(app, frame, chunks[0]);
    stats::render_breakdown(app, frame, chunks[1]);
    filter_bar::render(app, frame, chunks[2]);
    cards::render(app, frame, chunks[3]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let scope = app
        .session
        .filename
        .as_deref()
        .map(|f| format!("  |  document: {f}"))
        .unwrap_or_default();

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" casedeck ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::styled(
            format!("  {}{}", app.config.server.base_url, scope),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(header, area);
}

fn render_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let hints = if app.confirm.is_some() {
        "[y] Confirm  [n] Cancel"
    } else if app.modal.is_some() {
        "[Up/Down] Field  [Left/Right] Change  [Enter] Save  [Esc] Cancel"
    } else {
        match app.input_mode {
            InputMode::Normal => {
                "[i] File  [g] Generate  [e] Edit  [d] Delete  [c] Clear all  [x] Export  [r] Reload  [Tab] Filter  [q] Quit"
            }
            InputMode::EnteringPath => "[Enter] Select file  [Esc] Cancel",
        }
    };

    let state = match &app.upload {
        UploadState::Loading(file) => format!("generating from {}...", file.name),
        _ => format!("{} test cases", app.session.cases().len()),
    };

    let status = format!("{hints}  |  {state}");
    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
