//! Collision detection against the floor, the walls and locked blocks.
//!
//! Checks run against a *candidate* state. Callers commit a candidate only
//! when it passes, except for the descent path, where a colliding candidate
//! triggers locking of the previous piece.

use crate::board::LockedBlocks;
use crate::game_state::{GameState, MovingPiece};
use crate::pieces::shape_width;

/// True when the piece breaches the floor or overlaps a locked cell.
///
/// No piece never collides.
pub fn collides(moving: Option<&MovingPiece>, locked: &LockedBlocks, grid_height: u16) -> bool {
    let Some(piece) = moving else {
        return false;
    };

    let floor = grid_height as i32 - 1;
    piece
        .cells()
        .iter()
        .any(|&c| c.row > floor || locked.contains(c))
}

/// True when a rotate/shift candidate must be rejected.
///
/// Covers [`collides`] plus the left wall and the right wall. The right wall
/// is checked both with the tabulated width and with the actual rightmost
/// cell, so no cell can ever land at `column >= grid_width`.
pub fn invalid_move(state: &GameState) -> bool {
    if collides(state.moving(), state.locked(), state.grid_height()) {
        return true;
    }

    let Some(piece) = state.moving() else {
        return false;
    };

    let width = state.grid_width() as i32;
    let cells = piece.cells();
    let leftmost = cells.iter().map(|c| c.column).min().unwrap_or(0);
    let rightmost = cells.iter().map(|c| c.column).max().unwrap_or(0);

    leftmost < 0
        || piece.position.column + shape_width(piece.shape, piece.orientation) > width
        || rightmost >= width
}

impl GameState {
    /// [`collides`] applied to this state
    pub fn collides(&self) -> bool {
        collides(self.moving(), self.locked(), self.grid_height())
    }
}
