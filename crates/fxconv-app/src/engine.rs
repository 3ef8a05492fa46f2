//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel, the background task
//! registry, the shutdown signal, and the rate source. Both front ends create
//! one, feed it messages, and render from `engine.state`.

use tokio::sync::{broadcast, mpsc, watch};

use fxconv_core::prelude::*;
use fxconv_rates::{HttpRateSource, RateSource};

use crate::actions::TaskRegistry;
use crate::config::Settings;
use crate::engine_event::{EngineEvent, StateSnapshot};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Orchestration engine for the converter.
pub struct Engine<S = HttpRateSource> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Handles of background fetch and countdown tasks
    tasks: TaskRegistry,

    /// Send `true` to initiate shutdown.
    pub shutdown_tx: watch::Sender<bool>,

    /// Receiver for the shutdown signal. Clone for background tasks.
    pub shutdown_rx: watch::Receiver<bool>,

    /// Catalog and rate provider
    source: S,

    /// Event broadcaster for external consumers
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine<HttpRateSource> {
    /// Create an Engine talking to the configured HTTP services.
    ///
    /// Also spawns the OS signal handler. Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let endpoints = settings.endpoints.endpoints()?;
        let source = HttpRateSource::new(endpoints, settings.endpoints.timeout())?;

        let engine = Self::with_source(settings, source);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }
}

impl<S> Engine<S>
where
    S: RateSource + Clone + Send + Sync + 'static,
{
    /// Create an Engine over any rate source
    pub fn with_source(settings: Settings, source: S) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            tasks: TaskRegistry::new(),
            shutdown_tx,
            shutdown_rx,
            source,
            event_tx,
        }
    }

    /// Kick off startup work (the one-time catalog fetch)
    pub fn start(&mut self) {
        info!(
            "Starting converter: {} -> {}, amount {:?}",
            self.state.conversion.source,
            self.state.conversion.target,
            self.state.conversion.amount_text
        );
        self.process_message(Message::LoadCatalog);
    }

    /// Subscribe to engine events.
    ///
    /// A subscriber that falls behind loses the oldest events.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(
            &mut self.state,
            msg,
            &self.source,
            &self.msg_tx,
            &mut self.tasks,
            &self.shutdown_rx,
        );

        let post = StateSnapshot::capture(&self.state);
        for event in pre.diff(&post) {
            self.emit(event);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from background tasks or input sources
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of background tasks still running
    pub fn active_tasks(&self) -> usize {
        self.tasks.active()
    }

    /// Signal background tasks to stop and abort whatever is left.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);
        self.tasks.abort_all();
        info!("Engine shut down");
    }

    /// send() only fails when nobody is subscribed.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
