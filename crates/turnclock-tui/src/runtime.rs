//! Async runtime.
//!
//! Event loop that drives terminal I/O around the pure reducer. An input
//! task and a one-second timer push events onto a single mpsc queue; the
//! processing loop is the only receiver and the only writer of the model.
//! Every processed event ends in a redraw, so the screen always shows the
//! state the last event produced.
//!
//! Shutdown is a watch flag. The loop raises it once quit is confirmed;
//! producer tasks observe it and stop. An effect task may race one extra
//! send after that, which fails harmlessly on the closed queue.

use std::{
    io::{self, Stdout, stdout},
    path::PathBuf,
};

use crossterm::{
    ExecutableCommand,
    event::{Event as TerminalEvent, EventStream, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};
use turnclock_app::{Effect, Event, KeyInput, Model, Step, TICK_UNIT, update};
use turnclock_core::{LogRecord, Logbook, load_options, save_options};

use crate::{
    input, ui,
    view::{KeyRoute, ViewState},
};

/// Events buffered before producers block. Sized for a burst of key
/// repeats; the loop drains far faster than a human types.
const QUEUE_CAPACITY: usize = 64;

/// File that receives the CSV action log when logging is enabled.
const LOGBOOK_PATH: &str = "turnclock_log.csv";

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Follow-up work the session hands back to the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HostAction {
    /// Push an event onto the queue from a spawned task.
    Enqueue(Event),
    /// Stop the event loop.
    Quit,
}

/// Owns the model and everything that reacts to a processed event: the
/// view state, options persistence, and the CSV logbook.
///
/// Kept free of terminal handles so the orchestration logic tests without
/// one.
struct Session {
    model: Model,
    view: ViewState,
    options_path: PathBuf,
    logbook_path: PathBuf,
    logbook: Option<Logbook>,
}

impl Session {
    fn new(model: Model, options_path: PathBuf, logbook_path: PathBuf) -> Self {
        Self { model, view: ViewState::new(), options_path, logbook_path, logbook: None }
    }

    fn model(&self) -> &Model {
        &self.model
    }

    fn view(&self) -> &ViewState {
        &self.view
    }

    /// Route one key through the view layer, then the reducer.
    fn handle_key(&mut self, key: KeyInput) -> Vec<HostAction> {
        match self.view.handle_key(key, &self.model) {
            KeyRoute::Consumed => Vec::new(),
            KeyRoute::Send(event) => vec![HostAction::Enqueue(event)],
            KeyRoute::Quit => vec![HostAction::Quit],
            KeyRoute::ToReducer => self.apply(Event::Key(key)),
        }
    }

    /// Run one event through the reducer and absorb the step.
    ///
    /// Stores the new model, forwards log records, persists options when
    /// the event changed them, and translates the effect for the loop.
    fn apply(&mut self, event: Event) -> Vec<HostAction> {
        let Step { model, effect, records } = update(&self.model, event);
        let options_changed = model.options != self.model.options;
        self.model = model;

        self.forward_records(&records);
        if options_changed {
            self.persist_options();
        }

        let mut actions = Vec::new();
        match effect {
            Some(Effect::Emit(event)) => actions.push(HostAction::Enqueue(event)),
            Some(Effect::Confirm(kind)) => self.view.open_confirm(kind),
            Some(Effect::RestoreMain) => self.view.dismiss_overlay(),
            None => {},
        }
        actions
    }

    /// Append transition records to the CSV logbook when logging is on.
    ///
    /// The book opens lazily on the first record after the toggle. Open and
    /// write failures drop the book, never the session; the on-screen log
    /// keeps every entry either way.
    fn forward_records(&mut self, records: &[LogRecord]) {
        if records.is_empty() || !self.model.options.logging {
            return;
        }

        if self.logbook.is_none() {
            match Logbook::open(&self.logbook_path) {
                Ok(book) => self.logbook = Some(book),
                Err(e) => {
                    warn!(error = %e, "logbook unavailable, records stay on screen only");
                    return;
                },
            }
        }

        let Some(mut book) = self.logbook.take() else {
            return;
        };
        for record in records {
            if let Err(e) = book.append(record) {
                warn!(error = %e, "logbook write failed, closing the book");
                return;
            }
        }
        self.logbook = Some(book);
    }

    /// Write the options file. A failure is logged and the session keeps
    /// going with its in-memory copy.
    fn persist_options(&self) {
        if let Err(e) = save_options(&self.model.options, &self.options_path, true) {
            warn!(error = %e, path = %self.options_path.display(), "options not saved");
        }
    }
}

/// Async runtime for the TUI.
///
/// Owns the terminal for its whole lifetime; the `Drop` impl restores the
/// host shell even when the loop exits through an error.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    session: Session,
}

impl Runtime {
    /// Load options from `options_path` and take over the terminal.
    pub fn create(options_path: PathBuf) -> Result<Self, RuntimeError> {
        let options = load_options(&options_path);
        let model = Model::new(options);
        let session = Session::new(model, options_path, PathBuf::from(LOGBOOK_PATH));

        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, session })
    }

    /// Run the main event loop until the user confirms quitting.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        // The queue exists before either producer spawns, so no event can
        // be lost to a not-yet-created channel.
        let (events, mut queue) = mpsc::channel::<Event>(QUEUE_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        spawn_timer(events.clone(), shutdown_rx.clone());
        spawn_input(events.clone(), shutdown_rx);

        while let Some(event) = queue.recv().await {
            let actions = match event {
                Event::Key(key) => self.session.handle_key(key),
                event => self.session.apply(event),
            };

            let mut quit = false;
            for action in actions {
                match action {
                    HostAction::Enqueue(event) => {
                        let sender = events.clone();
                        tokio::spawn(async move {
                            // A failed send only means shutdown closed the
                            // queue first.
                            let _ = sender.send(event).await;
                        });
                    },
                    HostAction::Quit => quit = true,
                }
            }

            self.render()?;

            if quit {
                debug!("quit confirmed, shutting down");
                let _ = shutdown_tx.send(true);
                break;
            }
        }

        Ok(())
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        let session = &self.session;
        self.terminal.draw(|frame| {
            ui::render(frame, session.model(), session.view());
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Timer task: one `Tick` per second until shutdown.
fn spawn_timer(events: mpsc::Sender<Event>, mut shutdown: watch::Receiver<bool>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_UNIT);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if events.send(Event::Tick).await.is_err() {
                        break;
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
    });
}

/// Input task: terminal keys onto the queue until shutdown.
///
/// Only key presses are forwarded; repeats, releases, and events with no
/// [`KeyInput`] counterpart are dropped here.
fn spawn_input(events: mpsc::Sender<Event>, mut shutdown: watch::Receiver<bool>) {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        loop {
            tokio::select! {
                maybe_event = stream.next() => {
                    match maybe_event {
                        Some(Ok(TerminalEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            let Some(key) = input::convert_key(&key) else {
                                continue;
                            };
                            if events.send(Event::Key(key)).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!(error = %e, "terminal event stream error");
                        }
                        None => break,
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
    });
}
