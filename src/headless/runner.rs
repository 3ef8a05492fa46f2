//! Headless mode runner - main event loop without TUI

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use fxconv_app::config::Settings;
use fxconv_app::{Engine, EngineEvent, Message};
use fxconv_core::prelude::*;
use fxconv_rates::RateSource;

use super::command::HeadlessCommand;
use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Currency converter starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            return Err(e);
        }
    };
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    HeadlessEvent::ready(&engine.state).emit();
    engine.start();
    emit_engine_events(&mut events);

    let result = headless_event_loop(&mut engine, &mut events).await;

    engine.shutdown();

    info!("Currency converter headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop<S>(
    engine: &mut Engine<S>,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()>
where
    S: RateSource + Clone + Send + Sync + 'static,
{
    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        match engine.next_message().await {
            Some(msg) => {
                engine.process_message(msg);
                emit_engine_events(events);
            }
            None => {
                error!("Message channel closed");
                return Err(Error::ChannelClosed);
            }
        }
    }

    Ok(())
}

/// Write every queued engine event to stdout
fn emit_engine_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = to_headless_event(event) {
                    headless.emit();
                }
            }
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Map an engine event to its NDJSON form. Shutdown has none.
fn to_headless_event(event: EngineEvent) -> Option<HeadlessEvent> {
    match event {
        EngineEvent::CatalogLoaded { count } => Some(HeadlessEvent::catalog_loaded(count)),
        EngineEvent::StateChanged(view) => Some(HeadlessEvent::state(view)),
        EngineEvent::ResultExpired => Some(HeadlessEvent::result_expired()),
        EngineEvent::Shutdown => None,
    }
}

/// Read commands from stdin and forward them to the engine (blocking)
///
/// End of input counts as `quit`.
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                HeadlessEvent::error(format!("Failed to read stdin: {}", e), false).emit();
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(command) = HeadlessCommand::parse(trimmed) else {
            warn!("Unknown stdin command: {}", trimmed);
            HeadlessEvent::unknown_command(trimmed).emit();
            continue;
        };

        info!("Stdin: {:?}", command);
        let quit = command == HeadlessCommand::Quit;
        if msg_tx.blocking_send(command.into_message()).is_err() || quit {
            info!("Stdin reader exiting");
            return;
        }
    }

    info!("Stdin closed, quitting");
    let _ = msg_tx.blocking_send(Message::Quit);
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxconv_app::ConversionView;

    #[test]
    fn test_engine_events_map_to_headless() {
        assert!(matches!(
            to_headless_event(EngineEvent::CatalogLoaded { count: 3 }),
            Some(HeadlessEvent::CatalogLoaded { count: 3, .. })
        ));
        assert!(matches!(
            to_headless_event(EngineEvent::ResultExpired),
            Some(HeadlessEvent::ResultExpired { .. })
        ));
        assert!(to_headless_event(EngineEvent::Shutdown).is_none());
    }

    #[test]
    fn test_state_event_carries_view() {
        let view = ConversionView::capture(&fxconv_app::AppState::new());
        match to_headless_event(EngineEvent::StateChanged(view.clone())) {
            Some(HeadlessEvent::State { view: mapped, .. }) => assert_eq!(mapped, view),
            other => panic!("unexpected {:?}", other),
        }
    }
}
