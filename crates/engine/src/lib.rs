//! Session engine: state transitions, the tick timer and the game session.
//!
//! [`transition`] holds the pure `(state, event) -> state` functions.
//! [`GameSession`] is the only owner of the current state; it serializes
//! timer ticks and player input through `&mut self`, one full transition at a
//! time. [`transcript`] records and replays the events a session consumed.

pub mod config;
pub mod session;
pub mod ticker;
pub mod transcript;
pub mod transition;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use config::GameConfig;
pub use session::GameSession;
pub use ticker::Ticker;
pub use transcript::{Record, Transcript, TranscriptHeader, TranscriptWriter};
pub use transition::{apply_action, lock_and_clear, next_state, spawn, tick};
