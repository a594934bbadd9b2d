//! Terminal block-fall game (workspace facade crate).
//!
//! Re-exports the member crates as `tui_blockfall::{core,engine,input,term,types}`
//! and hosts the subscriber setup shared by the binaries.

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod logging;
