//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the falling-block game: the shape
//! catalog, geometry, collision detection, line clearing, the game state
//! value and spawn selection. It has **zero dependencies** on UI, timers or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (replayable)
//! - **Testable**: Every rule is a small function over plain data
//! - **Portable**: Runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`pieces`]: Shape offsets and widths for every (shape, orientation)
//! - [`geometry`]: Offsets → absolute cells
//! - [`board`]: The locked-block set
//! - [`collision`]: Floor, wall and overlap checks on candidate states
//! - [`lines`]: Filled-row detection and compaction
//! - [`game_state`]: The state value every transition produces
//! - [`rng`]: Deterministic spawn selection from allowed sets
//! - [`frame`]: Boolean occupancy grid for the render consumer
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{clear_rows, filled_rows, GameState};
//! use tui_blockfall_core::types::Cell;
//!
//! let row = (0..4).map(|c| Cell::new(c, 5));
//! let state = GameState::new(4, 10).with_locked(row.collect());
//!
//! assert_eq!(filled_rows(4, state.locked()), vec![5]);
//!
//! let next = clear_rows(&state);
//! assert!(next.locked().is_empty());
//! assert_eq!(next.score(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod frame;
pub mod game_state;
pub mod geometry;
pub mod lines;
pub mod pieces;
pub mod rng;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::LockedBlocks;
pub use collision::{collides, invalid_move};
pub use frame::Frame;
pub use game_state::{GameState, MovingPiece};
pub use geometry::{piece_cells, translate};
pub use lines::{clear_rows, filled_rows};
pub use pieces::{shape_cells, shape_extent, shape_width, PieceShape};
pub use rng::{SimpleRng, SpawnColumn, SpawnDraw, SpawnPolicy};
