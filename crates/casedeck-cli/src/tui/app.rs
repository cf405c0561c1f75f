//! Application state and main event loop.

use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use casedeck_core::testcase::{PRIORITY_CHOICES, TEST_TYPE_CHOICES};
use casedeck_core::{
    ApiError, Config, Filter, SelectedFile, Session, TestCase, TestCaseApi, TestCaseDraft,
    UploadResponse,
};

use super::event::{Event, EventHandler};
use super::ui;

/// How long a toast stays up before the tick handler dismisses it.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Filter bar entries: "all" plus the fixed type list.
pub const FILTER_CHOICES: [&str; 8] = [
    "all",
    "Functional",
    "Performance",
    "Security",
    "Usability",
    "Reliability",
    "Compatibility",
    "Maintainability",
];

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a document path into the upload panel
    EnteringPath,
}

/// Presentation of the upload panel.
#[derive(Debug, Clone, Default)]
pub enum UploadState {
    /// Nothing selected yet: prompt for a path
    #[default]
    DropZone,
    /// A validated document, ready to generate
    Selected(SelectedFile),
    /// Upload request in flight; keeps the selection so a failure can
    /// restore it for retry without re-selecting
    Loading(SelectedFile),
}

/// A transient, auto-dismissing status message.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// Destructive actions that require interactive confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCase(i64),
    ClearAll,
}

impl ConfirmAction {
    pub fn message(self) -> &'static str {
        match self {
            Self::DeleteCase(_) => "Are you sure you want to delete this test case?",
            Self::ClearAll => {
                "Are you sure you want to delete ALL test cases? This action cannot be undone."
            }
        }
    }
}

/// Fields of the edit form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Description,
    Priority,
    TestType,
    Preconditions,
    TestSteps,
    ExpectedResult,
}

impl EditField {
    pub const ALL: [EditField; 7] = [
        Self::Name,
        Self::Description,
        Self::Priority,
        Self::TestType,
        Self::Preconditions,
        Self::TestSteps,
        Self::ExpectedResult,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Name => "Test Case Name",
            Self::Description => "Description",
            Self::Priority => "Priority",
            Self::TestType => "Test Type",
            Self::Preconditions => "Preconditions",
            Self::TestSteps => "Test Steps",
            Self::ExpectedResult => "Expected Result",
        }
    }

    /// Choice fields cycle through a fixed set instead of free text.
    pub fn is_choice(self) -> bool {
        matches!(self, Self::Priority | Self::TestType)
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The edit form: one record's editable fields plus the focused field.
///
/// Submission sends the whole draft, not a diff; dismissal discards it
/// without confirmation.
#[derive(Debug, Clone)]
pub struct EditModal {
    pub id: i64,
    pub draft: TestCaseDraft,
    pub focus: EditField,
}

impl EditModal {
    pub fn field_value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.draft.test_case_name,
            EditField::Description => &self.draft.description,
            EditField::Priority => &self.draft.priority,
            EditField::TestType => &self.draft.test_type,
            EditField::Preconditions => &self.draft.preconditions,
            EditField::TestSteps => &self.draft.test_steps,
            EditField::ExpectedResult => &self.draft.expected_result,
        }
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            EditField::Name => Some(&mut self.draft.test_case_name),
            EditField::Description => Some(&mut self.draft.description),
            EditField::Preconditions => Some(&mut self.draft.preconditions),
            EditField::TestSteps => Some(&mut self.draft.test_steps),
            EditField::ExpectedResult => Some(&mut self.draft.expected_result),
            EditField::Priority | EditField::TestType => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        if let Some(value) = self.focused_text_mut() {
            value.push(c);
        }
    }

    fn delete_char(&mut self) {
        if let Some(value) = self.focused_text_mut() {
            value.pop();
        }
    }

    fn cycle_choice(&mut self, step: isize) {
        let (choices, value): (&[&str], &mut String) = match self.focus {
            EditField::Priority => (&PRIORITY_CHOICES, &mut self.draft.priority),
            EditField::TestType => (&TEST_TYPE_CHOICES, &mut self.draft.test_type),
            _ => return,
        };

        let current = choices
            .iter()
            .position(|c| *c == value.as_str())
            .unwrap_or(0) as isize;
        let len = choices.len() as isize;
        let next = (current + step).rem_euclid(len) as usize;
        *value = choices[next].to_string();
    }
}

/// Main application state.
pub struct App {
    /// Client session: case list, filter, filename scope
    pub session: Session,
    /// Upload panel presentation
    pub upload: UploadState,
    /// Current input mode
    pub input_mode: InputMode,
    /// Path being typed into the upload panel
    pub path_input: String,
    /// Cursor into the visible (filtered) case list
    pub selected: usize,
    /// Index into [`FILTER_CHOICES`]
    pub filter_index: usize,
    /// Edit form, when open
    pub modal: Option<EditModal>,
    /// Pending destructive action awaiting confirmation
    pub confirm: Option<ConfirmAction>,
    /// Transient status message
    pub toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Configuration
    pub config: Config,
    api: Arc<dyn TestCaseApi>,
}

impl App {
    /// Create a new app instance with an empty session.
    pub fn new(config: Config, api: Arc<dyn TestCaseApi>) -> Self {
        Self {
            session: Session::new(),
            upload: UploadState::DropZone,
            input_mode: InputMode::Normal,
            path_input: String::new(),
            selected: 0,
            filter_index: 0,
            modal: None,
            confirm: None,
            toast: None,
            should_quit: false,
            config,
            api,
        }
    }

    /// Run the main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventHandler::new();

        // Start every session from a clean slate, unless configured off.
        if self.config.startup.clear_on_start {
            self.spawn_startup_clear(events.sender());
        }

        loop {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                self.handle_event(event, events.sender());
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one event. Completions of overlapping requests land here in
    /// arrival order; the last one wins.
    fn handle_event(&mut self, event: Event, event_tx: mpsc::UnboundedSender<Event>) {
        match event {
            Event::Key(key) => self.handle_key_event(key, event_tx),
            Event::Tick => self.expire_toast(),
            Event::UploadFinished(response) => self.handle_upload_finished(response, event_tx),
            Event::UploadFailed(message) => self.handle_upload_failed(message),
            Event::ListLoaded(cases) => {
                self.session.replace(cases);
                self.clamp_selection();
            }
            Event::ListFailed(message) => self.show_toast(message),
            Event::UpdateFinished => {
                self.show_toast("Test case updated successfully");
                self.close_modal();
                self.spawn_list_fetch(None, event_tx);
            }
            // Modal stays open with the entered values so the user can retry
            Event::UpdateFailed(message) => self.show_toast(message),
            Event::DeleteFinished => {
                self.show_toast("Test case deleted successfully");
                self.spawn_list_fetch(None, event_tx);
            }
            Event::DeleteFailed(message) => self.show_toast(message),
            Event::ClearFinished(message) => {
                // Empty state is rendered directly, no re-fetch
                self.session.clear();
                self.selected = 0;
                self.show_toast(message);
            }
            Event::ClearFailed(message) => self.show_toast(message),
            Event::ExportFinished(path) => {
                self.show_toast(format!("Export saved to {}", path.display()));
            }
            Event::ExportFailed(message) => self.show_toast(message),
            Event::StartupCleared => {
                tracing::info!("test cases cleared on startup");
            }
            Event::StartupClearFailed(message) => {
                tracing::warn!(%message, "startup clear failed");
                self.show_toast(message);
            }
        }
    }

    /// Handle a key event, routing to whichever surface captures input.
    fn handle_key_event(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        if self.confirm.is_some() {
            self.handle_confirm_key(key, event_tx);
            return;
        }
        if self.modal.is_some() {
            self.handle_modal_key(key, event_tx);
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key, event_tx),
            InputMode::EnteringPath => self.handle_path_key(key),
        }
    }

    /// Handle key in normal mode.
    fn handle_normal_key(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('i') | KeyCode::Char('u') => {
                self.input_mode = InputMode::EnteringPath;
            }
            KeyCode::Backspace | KeyCode::Delete => self.remove_selection(),
            KeyCode::Char('g') => self.generate(event_tx),
            KeyCode::Char('r') => {
                let filename = self.session.filename.clone();
                self.spawn_list_fetch(filename, event_tx);
            }
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit(),
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_case().map(|c| c.id) {
                    self.confirm = Some(ConfirmAction::DeleteCase(id));
                }
            }
            KeyCode::Char('c') => self.confirm = Some(ConfirmAction::ClearAll),
            KeyCode::Char('x') => self.export(event_tx),
            KeyCode::Tab | KeyCode::Right => self.cycle_filter(1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_filter(-1),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            _ => {}
        }
    }

    /// Handle key while typing a document path.
    fn handle_path_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => self.select_file(),
            KeyCode::Char(c) => {
                self.path_input.push(c);
            }
            KeyCode::Backspace => {
                self.path_input.pop();
            }
            _ => {}
        }
    }

    /// Handle key while the edit form is open.
    fn handle_modal_key(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        match key.code {
            // Dismissal discards in-progress edits without confirmation
            KeyCode::Esc => {
                self.close_modal();
                return;
            }
            KeyCode::Enter => {
                self.submit_edit(event_tx);
                return;
            }
            _ => {}
        }

        let Some(modal) = self.modal.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up | KeyCode::BackTab => modal.focus = modal.focus.previous(),
            KeyCode::Down | KeyCode::Tab => modal.focus = modal.focus.next(),
            KeyCode::Left => modal.cycle_choice(-1),
            KeyCode::Right => modal.cycle_choice(1),
            KeyCode::Char(c) => modal.insert_char(c),
            KeyCode::Backspace => modal.delete_char(),
            _ => {}
        }
    }

    /// Handle key while a confirmation dialog is up.
    fn handle_confirm_key(&mut self, key: KeyEvent, event_tx: mpsc::UnboundedSender<Event>) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Some(action) = self.confirm.take() {
                    match action {
                        ConfirmAction::DeleteCase(id) => self.spawn_delete(id, event_tx),
                        ConfirmAction::ClearAll => self.spawn_clear_all(event_tx),
                    }
                }
            }
            // Declined: no request is sent
            KeyCode::Char('n') | KeyCode::Esc => {
                self.confirm = None;
            }
            _ => {}
        }
    }

    /// Validate the typed path and switch to the selected-file presentation.
    /// A rejected file never produces a request, only a toast.
    fn select_file(&mut self) {
        let path = self.path_input.trim().to_string();
        self.input_mode = InputMode::Normal;
        if path.is_empty() {
            return;
        }

        match SelectedFile::from_path(&path) {
            Ok(file) => {
                self.upload = UploadState::Selected(file);
                self.path_input.clear();
            }
            Err(e) => self.show_toast(e.to_string()),
        }
    }

    /// Drop the selected document and restore the drop-zone presentation.
    fn remove_selection(&mut self) {
        if matches!(self.upload, UploadState::Selected(_)) {
            self.upload = UploadState::DropZone;
            self.path_input.clear();
        }
    }

    /// Submit the selected document for generation.
    fn generate(&mut self, event_tx: mpsc::UnboundedSender<Event>) {
        let file = match &self.upload {
            UploadState::Selected(file) => file.clone(),
            // Request already in flight
            UploadState::Loading(_) => return,
            UploadState::DropZone => {
                self.show_toast("Please select a file first.");
                return;
            }
        };

        self.upload = UploadState::Loading(file.clone());

        let api = self.api.clone();
        tokio::spawn(async move {
            match api.upload(&file).await {
                Ok(response) => {
                    let _ = event_tx.send(Event::UploadFinished(response));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "upload failed");
                    let _ = event_tx.send(Event::UploadFailed(format!("Error: {e}")));
                }
            }
        });
    }

    /// Upload succeeded: toast, reset the panel, re-fetch scoped to the
    /// uploaded document.
    fn handle_upload_finished(
        &mut self,
        response: UploadResponse,
        event_tx: mpsc::UnboundedSender<Event>,
    ) {
        let message = if response.replaced {
            format!(
                "Replaced previous test cases. Generated {} new test cases for \"{}\"",
                response.test_cases.len(),
                response.filename
            )
        } else {
            format!(
                "Successfully generated {} test cases for \"{}\"",
                response.test_cases.len(),
                response.filename
            )
        };
        self.show_toast(message);

        self.upload = UploadState::DropZone;
        self.path_input.clear();

        self.session.set_filename(response.filename.clone());
        self.spawn_list_fetch(Some(response.filename), event_tx);
    }

    /// Upload failed: toast, restore the selected-file presentation so the
    /// user can retry without re-selecting.
    fn handle_upload_failed(&mut self, message: String) {
        self.show_toast(message);
        self.upload = match std::mem::take(&mut self.upload) {
            UploadState::Loading(file) => UploadState::Selected(file),
            other => other,
        };
    }

    /// Open the edit form for the selected card.
    fn open_edit(&mut self) {
        let Some(id) = self.selected_case().map(|c| c.id) else {
            return;
        };
        self.edit_case(id);
    }

    /// Open the edit form for a case id. An id that is not in the session
    /// is a silent no-op.
    fn edit_case(&mut self, id: i64) {
        let Some(case) = self.session.find(id) else {
            return;
        };
        let draft = case.to_draft();

        self.session.editing_id = Some(id);
        self.modal = Some(EditModal {
            id,
            draft,
            focus: EditField::Name,
        });
    }

    fn close_modal(&mut self) {
        self.modal = None;
        self.session.editing_id = None;
    }

    /// Send the full draft. The modal closes only on the success event.
    fn submit_edit(&mut self, event_tx: mpsc::UnboundedSender<Event>) {
        let Some(modal) = &self.modal else {
            return;
        };
        let id = modal.id;
        let draft = modal.draft.clone();

        let api = self.api.clone();
        tokio::spawn(async move {
            match api.update(id, &draft).await {
                Ok(()) => {
                    let _ = event_tx.send(Event::UpdateFinished);
                }
                Err(e) => {
                    tracing::warn!(error = %e, id, "update failed");
                    let _ =
                        event_tx.send(Event::UpdateFailed("Error updating test case".to_string()));
                }
            }
        });
    }

    fn spawn_delete(&self, id: i64, event_tx: mpsc::UnboundedSender<Event>) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.delete(id).await {
                Ok(()) => {
                    let _ = event_tx.send(Event::DeleteFinished);
                }
                Err(e) => {
                    tracing::warn!(error = %e, id, "delete failed");
                    let _ =
                        event_tx.send(Event::DeleteFailed("Error deleting test case".to_string()));
                }
            }
        });
    }

    fn spawn_clear_all(&self, event_tx: mpsc::UnboundedSender<Event>) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.clear_all().await {
                Ok(message) => {
                    let _ = event_tx.send(Event::ClearFinished(message));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clear-all failed");
                    let message = match e {
                        ApiError::Server { message, .. } => message,
                        _ => "Error clearing test cases".to_string(),
                    };
                    let _ = event_tx.send(Event::ClearFailed(message));
                }
            }
        });
    }

    fn spawn_startup_clear(&self, event_tx: mpsc::UnboundedSender<Event>) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.clear_all().await {
                Ok(_) => {
                    let _ = event_tx.send(Event::StartupCleared);
                }
                Err(e) => {
                    let _ = event_tx
                        .send(Event::StartupClearFailed(format!("Error clearing test cases: {e}")));
                }
            }
        });
    }

    /// Fetch the list, optionally scoped to one document.
    fn spawn_list_fetch(&self, filename: Option<String>, event_tx: mpsc::UnboundedSender<Event>) {
        let api = self.api.clone();
        tokio::spawn(async move {
            match api.list(filename.as_deref()).await {
                Ok(cases) => {
                    let _ = event_tx.send(Event::ListLoaded(cases));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "list fetch failed");
                    let _ =
                        event_tx.send(Event::ListFailed("Error loading test cases".to_string()));
                }
            }
        });
    }

    /// Trigger the spreadsheet download and toast immediately; the result
    /// arrives as a follow-up event.
    fn export(&mut self, event_tx: mpsc::UnboundedSender<Event>) {
        self.show_toast("Exporting test cases to Excel...");

        let api = self.api.clone();
        let dir = PathBuf::from(&self.config.export.output_dir);
        tokio::spawn(async move {
            match api.export(&dir).await {
                Ok(path) => {
                    let _ = event_tx.send(Event::ExportFinished(path));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "export failed");
                    let _ = event_tx
                        .send(Event::ExportFailed("Error exporting test cases".to_string()));
                }
            }
        });
    }

    /// Set the active filter and re-anchor the cursor.
    fn cycle_filter(&mut self, step: isize) {
        let len = FILTER_CHOICES.len() as isize;
        self.filter_index = (self.filter_index as isize + step).rem_euclid(len) as usize;
        self.session.filter = Filter::from_label(FILTER_CHOICES[self.filter_index]);
        self.selected = 0;
    }

    fn move_selection(&mut self, step: isize) {
        let len = self.session.visible().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + step;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.session.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// The card under the cursor, if the visible list is non-empty.
    pub fn selected_case(&self) -> Option<&TestCase> {
        self.session.visible().get(self.selected).copied()
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if toast.shown_at.elapsed() >= TOAST_TTL {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;

    struct StubApi;

    #[async_trait]
    impl TestCaseApi for StubApi {
        async fn upload(&self, _file: &SelectedFile) -> Result<UploadResponse, ApiError> {
            Err(ApiError::Network("stub".to_string()))
        }

        async fn list(&self, _filename: Option<&str>) -> Result<Vec<TestCase>, ApiError> {
            Ok(Vec::new())
        }

        async fn update(&self, _id: i64, _draft: &TestCaseDraft) -> Result<(), ApiError> {
            Ok(())
        }

        async fn delete(&self, _id: i64) -> Result<(), ApiError> {
            Ok(())
        }

        async fn clear_all(&self) -> Result<String, ApiError> {
            Ok("Successfully deleted 0 test cases".to_string())
        }

        async fn export(&self, _dest_dir: &Path) -> Result<PathBuf, ApiError> {
            Ok(PathBuf::from("stub.xlsx"))
        }
    }

    fn test_app() -> App {
        App::new(Config::default(), Arc::new(StubApi))
    }

    fn case(id: i64, test_type: &str) -> TestCase {
        TestCase {
            id,
            test_case_name: format!("case-{id}"),
            description: None,
            preconditions: None,
            test_steps: "steps".to_string(),
            expected_result: "result".to_string(),
            priority: "Low".to_string(),
            test_type: test_type.to_string(),
            requirement_file: None,
            created_at: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sender() -> mpsc::UnboundedSender<Event> {
        mpsc::unbounded_channel().0
    }

    #[test]
    fn test_generate_without_selection_toasts_and_sends_nothing() {
        let mut app = test_app();
        app.generate(sender());

        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Please select a file first.")
        );
        assert!(matches!(app.upload, UploadState::DropZone));
    }

    #[test]
    fn test_list_loaded_replaces_session_and_clamps_cursor() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(1, "Functional")]), sender());
        app.selected = 5;

        app.handle_event(Event::ListLoaded(vec![case(1, "Functional")]), sender());
        assert_eq!(app.session.cases().len(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_filter_cycles_and_wraps() {
        let mut app = test_app();
        app.handle_event(
            Event::ListLoaded(vec![case(1, "Functional"), case(2, "Security")]),
            sender(),
        );

        app.handle_key_event(key(KeyCode::Tab), sender());
        assert_eq!(app.session.filter, Filter::Type("Functional".to_string()));
        assert_eq!(app.session.visible().len(), 1);

        app.handle_key_event(key(KeyCode::BackTab), sender());
        assert_eq!(app.session.filter, Filter::All);

        // Backwards from "all" wraps to the last type
        app.handle_key_event(key(KeyCode::BackTab), sender());
        assert_eq!(
            app.session.filter,
            Filter::Type("Maintainability".to_string())
        );
    }

    #[test]
    fn test_upload_failure_restores_selected_presentation() {
        let mut app = test_app();
        let file = SelectedFile {
            path: PathBuf::from("reqs.txt"),
            name: "reqs.txt".to_string(),
            size: 10,
            kind: casedeck_core::DocumentKind::PlainText,
        };
        app.upload = UploadState::Loading(file);

        app.handle_event(Event::UploadFailed("Error: boom".to_string()), sender());

        assert!(matches!(app.upload, UploadState::Selected(_)));
        assert_eq!(app.toast.as_ref().unwrap().message, "Error: boom");
    }

    #[tokio::test]
    async fn test_upload_success_resets_panel_and_scopes_session() {
        let mut app = test_app();
        let response = UploadResponse {
            message: None,
            filename: "reqs.pdf".to_string(),
            test_cases: vec![case(1, "Functional"), case(2, "Security")],
            replaced: false,
        };
        app.upload = UploadState::Loading(SelectedFile {
            path: PathBuf::from("reqs.pdf"),
            name: "reqs.pdf".to_string(),
            size: 10,
            kind: casedeck_core::DocumentKind::Pdf,
        });

        app.handle_event(Event::UploadFinished(response), sender());

        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Successfully generated 2 test cases for \"reqs.pdf\""
        );
        assert!(matches!(app.upload, UploadState::DropZone));
        assert_eq!(app.session.filename.as_deref(), Some("reqs.pdf"));
    }

    #[tokio::test]
    async fn test_upload_replacement_toast() {
        let mut app = test_app();
        let response = UploadResponse {
            message: None,
            filename: "reqs.pdf".to_string(),
            test_cases: vec![case(1, "Functional")],
            replaced: true,
        };

        app.handle_event(Event::UploadFinished(response), sender());

        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Replaced previous test cases. Generated 1 new test cases for \"reqs.pdf\""
        );
    }

    #[test]
    fn test_open_edit_populates_all_fields() {
        let mut app = test_app();
        let mut tc = case(3, "Functional");
        tc.description = Some("desc".to_string());
        app.handle_event(Event::ListLoaded(vec![tc]), sender());

        app.handle_key_event(key(KeyCode::Char('e')), sender());

        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.id, 3);
        assert_eq!(modal.draft.test_case_name, "case-3");
        assert_eq!(modal.draft.description, "desc");
        // Missing optionals populate as empty text
        assert_eq!(modal.draft.preconditions, "");
        assert_eq!(app.session.editing_id, Some(3));
    }

    #[test]
    fn test_open_edit_on_empty_grid_is_a_no_op() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('e')), sender());
        assert!(app.modal.is_none());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_edit_unknown_id_is_a_silent_no_op() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(1, "Functional")]), sender());

        app.edit_case(99);

        assert!(app.modal.is_none());
        assert!(app.session.editing_id.is_none());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_modal_editing_and_choice_cycling() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(3, "Functional")]), sender());
        app.handle_key_event(key(KeyCode::Char('e')), sender());

        // Type into the name field
        app.handle_key_event(key(KeyCode::Char('!')), sender());
        assert_eq!(app.modal.as_ref().unwrap().draft.test_case_name, "case-3!");

        // Move to priority and cycle Low -> High
        app.handle_key_event(key(KeyCode::Down), sender());
        app.handle_key_event(key(KeyCode::Down), sender());
        assert_eq!(app.modal.as_ref().unwrap().focus, EditField::Priority);
        app.handle_key_event(key(KeyCode::Right), sender());
        assert_eq!(app.modal.as_ref().unwrap().draft.priority, "High");

        // Typing on a choice field does nothing
        app.handle_key_event(key(KeyCode::Char('z')), sender());
        assert_eq!(app.modal.as_ref().unwrap().draft.priority, "High");
    }

    #[test]
    fn test_modal_escape_discards_without_confirmation() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(3, "Functional")]), sender());
        app.handle_key_event(key(KeyCode::Char('e')), sender());
        app.handle_key_event(key(KeyCode::Char('!')), sender());

        app.handle_key_event(key(KeyCode::Esc), sender());
        assert!(app.modal.is_none());
        assert!(app.session.editing_id.is_none());
        // The underlying record was never touched locally
        assert_eq!(app.session.cases()[0].test_case_name, "case-3");
    }

    #[test]
    fn test_update_failure_keeps_modal_open_with_values() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(3, "Functional")]), sender());
        app.handle_key_event(key(KeyCode::Char('e')), sender());
        app.handle_key_event(key(KeyCode::Char('!')), sender());

        app.handle_event(
            Event::UpdateFailed("Error updating test case".to_string()),
            sender(),
        );

        let modal = app.modal.as_ref().unwrap();
        assert_eq!(modal.draft.test_case_name, "case-3!");
        assert_eq!(app.toast.as_ref().unwrap().message, "Error updating test case");
    }

    #[tokio::test]
    async fn test_update_success_closes_modal_and_refetches() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(3, "Functional")]), sender());
        app.handle_key_event(key(KeyCode::Char('e')), sender());

        app.handle_event(Event::UpdateFinished, sender());

        assert!(app.modal.is_none());
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Test case updated successfully"
        );
    }

    #[test]
    fn test_delete_requires_confirmation_and_decline_sends_nothing() {
        let mut app = test_app();
        app.handle_event(Event::ListLoaded(vec![case(7, "Functional")]), sender());

        app.handle_key_event(key(KeyCode::Char('d')), sender());
        assert_eq!(app.confirm, Some(ConfirmAction::DeleteCase(7)));

        app.handle_key_event(key(KeyCode::Char('n')), sender());
        assert!(app.confirm.is_none());
        assert_eq!(app.session.cases().len(), 1);
    }

    #[test]
    fn test_clear_all_success_renders_empty_state_directly() {
        let mut app = test_app();
        app.handle_event(
            Event::ListLoaded(vec![case(1, "Functional"), case(2, "Security")]),
            sender(),
        );

        app.handle_event(
            Event::ClearFinished("Successfully deleted 2 test cases".to_string()),
            sender(),
        );

        assert!(app.session.is_empty());
        assert_eq!(app.session.stats().total, 0);
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Successfully deleted 2 test cases"
        );
    }

    #[test]
    fn test_list_failure_leaves_prior_state_unchanged() {
        let mut app = test_app();
        app.handle_event(
            Event::ListLoaded(vec![case(1, "Functional"), case(2, "Security")]),
            sender(),
        );

        app.handle_event(Event::ListFailed("Error loading test cases".to_string()), sender());

        assert_eq!(app.session.cases().len(), 2);
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Error loading test cases"
        );
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let mut app = test_app();
        app.show_toast("hello");
        app.toast.as_mut().unwrap().shown_at = Instant::now() - TOAST_TTL;

        app.handle_event(Event::Tick, sender());
        assert!(app.toast.is_none());
    }

    #[test]
    fn test_path_input_rejects_bad_file_without_request() {
        let mut app = test_app();
        app.handle_key_event(key(KeyCode::Char('i')), sender());
        assert_eq!(app.input_mode, InputMode::EnteringPath);

        for c in "/tmp/reqs.exe".chars() {
            app.handle_key_event(key(KeyCode::Char(c)), sender());
        }
        app.handle_key_event(key(KeyCode::Enter), sender());

        assert!(matches!(app.upload, UploadState::DropZone));
        assert_eq!(
            app.toast.as_ref().unwrap().message,
            "Invalid file type. Please upload PDF, DOCX, or TXT files."
        );
    }
}
