//! Message processing
//!
//! Runs a message and its follow-ups through the TEA update function and
//! dispatches the resulting actions.

use tokio::sync::{mpsc, watch};

use fxconv_rates::RateSource;

use crate::actions::{handle_action, TaskRegistry};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    source: &S,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut TaskRegistry,
    shutdown_rx: &watch::Receiver<bool>,
) where
    S: RateSource + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, source, msg_tx, tasks, shutdown_rx);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
