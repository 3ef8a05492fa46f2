//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every background task reports back by sending a [`Message`]; none of them
//! touches [`AppState`](crate::state::AppState) directly.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use fxconv_core::prelude::*;
use fxconv_core::CurrencyCode;
use fxconv_rates::RateSource;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Interval between countdown ticks
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// Handles of the engine's background tasks.
///
/// At most one countdown ticker runs at a time; starting another aborts the
/// previous one.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    countdown: Option<JoinHandle<()>>,
    fetches: Vec<JoinHandle<()>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a fetch task, forgetting finished ones
    pub fn track_fetch(&mut self, handle: JoinHandle<()>) {
        self.fetches.retain(|h| !h.is_finished());
        self.fetches.push(handle);
    }

    /// Install a new countdown ticker, aborting the old one
    pub fn replace_countdown(&mut self, handle: JoinHandle<()>) {
        if let Some(old) = self.countdown.replace(handle) {
            old.abort();
        }
    }

    /// Number of tasks still running
    pub fn active(&self) -> usize {
        self.fetches.iter().filter(|h| !h.is_finished()).count()
            + self
                .countdown
                .as_ref()
                .map_or(0, |h| usize::from(!h.is_finished()))
    }

    /// Abort everything; used at shutdown
    pub fn abort_all(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.abort();
        }
        for handle in self.fetches.drain(..) {
            handle.abort();
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<S>(
    action: UpdateAction,
    source: &S,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut TaskRegistry,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: RateSource + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::LoadCatalog => {
            tasks.track_fetch(spawn_catalog_load(source.clone(), msg_tx.clone()));
        }

        UpdateAction::FetchRates { request_id, base } => {
            tasks.track_fetch(spawn_rate_fetch(
                source.clone(),
                request_id,
                base,
                msg_tx.clone(),
            ));
        }

        UpdateAction::StartCountdown { generation, ticks } => {
            tasks.replace_countdown(spawn_countdown(
                generation,
                ticks,
                msg_tx.clone(),
                shutdown_rx.clone(),
            ));
        }
    }
}

/// Fetch the currency list and report the outcome
pub fn spawn_catalog_load<S>(source: S, msg_tx: mpsc::Sender<Message>) -> JoinHandle<()>
where
    S: RateSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match source.fetch_catalog().await {
            Ok(catalog) => Message::CatalogLoaded(catalog),
            Err(e) => Message::CatalogLoadFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    })
}

/// Fetch rates for `base` and report them tagged with `request_id`
pub fn spawn_rate_fetch<S>(
    source: S,
    request_id: u64,
    base: CurrencyCode,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    S: RateSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match source.fetch_rates(&base).await {
            Ok(table) => Message::RatesFetched { request_id, table },
            Err(e) => Message::RatesFetchFailed {
                request_id,
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    })
}

/// Send `ticks` countdown ticks for `generation`, one per second
pub fn spawn_countdown(
    generation: u64,
    ticks: u32,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + COUNTDOWN_INTERVAL, COUNTDOWN_INTERVAL);

        for _ in 0..ticks {
            tokio::select! {
                _ = interval.tick() => {
                    if msg_tx.send(Message::CountdownTick { generation }).await.is_err() {
                        return;
                    }
                }
                _ = shutdown_rx.changed() => {
                    trace!("Countdown {} stopped by shutdown", generation);
                    return;
                }
            }
        }
    })
}
