//! Event handling for the TUI.
//!
//! Terminal input, the tick timer, and completions of spawned API calls all
//! arrive through one channel, so the main loop stays a single consumer and
//! overlapping responses apply strictly in arrival order (last one wins).

use crossterm::event::{KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use casedeck_core::{TestCase, UploadResponse};

/// Events that can occur in the application.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// A tick occurred (drives toast expiry)
    Tick,
    /// Upload finished; carries the server's generation summary
    UploadFinished(UploadResponse),
    /// Upload failed with a toast-ready message
    UploadFailed(String),
    /// List fetch finished; replaces the session list wholesale
    ListLoaded(Vec<TestCase>),
    ListFailed(String),
    UpdateFinished,
    UpdateFailed(String),
    DeleteFinished,
    DeleteFailed(String),
    /// Clear-all finished; carries the server's confirmation message
    ClearFinished(String),
    ClearFailed(String),
    ExportFinished(PathBuf),
    ExportFailed(String),
    /// The startup wipe finished (logged, not toasted)
    StartupCleared,
    StartupClearFailed(String),
}

/// Handles events from various sources.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler.
    pub fn new() -> Self {
        let tick_rate = Duration::from_millis(100);
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        // Spawn the event polling task
        tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut interval = tokio::time::interval(tick_rate);

            loop {
                let crossterm_event = reader.next().fuse();
                let tick = interval.tick();

                tokio::select! {
                    maybe_event = crossterm_event => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                if let crossterm::event::Event::Key(key) = evt {
                                    // Only handle key press events, not release
                                    if key.kind == KeyEventKind::Press
                                        && event_tx.send(Event::Key(key)).is_err()
                                    {
                                        break;
                                    }
                                }
                            }
                            Some(Err(_)) => {}
                            None => break,
                        }
                    }
                    _ = tick => {
                        if event_tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Get the sender for completions of spawned API calls.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self._tx.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
