//! fxconv-app - Application state and orchestration for the currency converter
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction shared by the TUI and headless front ends, configuration
//! loading, and the background tasks that talk to the rate services.

pub mod actions;
pub mod config;
pub mod conversion;
pub mod engine;
pub mod engine_event;
pub mod fuzzy;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod picker;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::{ConversionView, EngineEvent};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppPhase, AppState, Focus};

// Re-export domain types for front ends
pub use conversion::{ConversionState, ConvertedAmount, Countdown, InlineError};
pub use picker::{PickerSide, PickerState};
