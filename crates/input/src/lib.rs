//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into discrete [`crate::types::GameAction`]s.
//! Every key press yields at most one action; auto-repeat is left to the
//! terminal.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
