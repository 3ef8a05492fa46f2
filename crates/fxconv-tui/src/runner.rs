//! Main TUI runner - entry point and event loop

use fxconv_app::config::Settings;
use fxconv_app::Engine;
use fxconv_core::prelude::*;
use fxconv_rates::RateSource;

use super::{event, render, terminal};

/// Run the converter in the terminal until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Build the engine before touching the terminal so config errors print cleanly
    let mut engine = Engine::new(settings)?;

    let mut term = ratatui::init();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<S>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<S>) -> Result<()>
where
    S: RateSource + Clone + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results, countdown ticks, signals
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
