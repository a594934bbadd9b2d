//! Game state module - the value every transition produces
//!
//! `GameState` is plain data: grid size, score, the moving piece and the
//! locked blocks. It is never mutated in place by callers outside this crate;
//! each transition builds a new value from the previous one.

use crate::board::LockedBlocks;
use crate::geometry::piece_cells;
use crate::pieces::{shape_cells, PieceShape};
use crate::types::{Cell, Orientation, ShapeId, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// The currently falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovingPiece {
    pub shape: ShapeId,
    pub orientation: Orientation,
    /// Anchor (top-left) position on the grid
    pub position: Cell,
}

impl MovingPiece {
    pub fn new(shape: ShapeId, orientation: Orientation, position: Cell) -> Self {
        Self {
            shape,
            orientation,
            position,
        }
    }

    /// Offsets for the current orientation
    pub fn offsets(&self) -> PieceShape {
        shape_cells(self.shape, self.orientation)
    }

    /// Absolute cells covered by this piece
    pub fn cells(&self) -> PieceShape {
        self.offsets().map(|c| c.offset_by(self.position))
    }

    /// Same piece shifted by `(dc, dr)`
    pub fn moved(&self, dc: i32, dr: i32) -> Self {
        Self {
            position: Cell::new(self.position.column + dc, self.position.row + dr),
            ..*self
        }
    }

    /// Same piece with the next orientation
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotate_cw(),
            ..*self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    grid_width: u16,
    grid_height: u16,
    score: u32,
    moving: Option<MovingPiece>,
    locked: LockedBlocks,
}

impl GameState {
    /// Create an empty game on a `grid_width` x `grid_height` grid
    pub fn new(grid_width: u16, grid_height: u16) -> Self {
        Self {
            grid_width,
            grid_height,
            score: 0,
            moving: None,
            locked: LockedBlocks::new(),
        }
    }

    pub fn grid_width(&self) -> u16 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u16 {
        self.grid_height
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moving(&self) -> Option<&MovingPiece> {
        self.moving.as_ref()
    }

    pub fn locked(&self) -> &LockedBlocks {
        &self.locked
    }

    /// Absolute cells of the moving piece, `None` when absent
    pub fn moving_cells(&self) -> Option<PieceShape> {
        piece_cells(self.moving.as_ref())
    }

    /// Copy of this state with a different moving piece
    pub fn with_moving(&self, moving: Option<MovingPiece>) -> Self {
        Self {
            moving,
            ..self.clone()
        }
    }

    /// Copy of this state with different locked blocks
    pub fn with_locked(&self, locked: LockedBlocks) -> Self {
        Self {
            locked,
            ..self.clone()
        }
    }

    /// Copy of this state where `piece` is merged into the locked blocks and
    /// the moving piece is absent. Cells already locked are skipped.
    pub fn with_piece_locked(&self, piece: &MovingPiece) -> Self {
        let mut locked = self.locked.clone();
        locked.extend(piece.cells());
        Self {
            locked,
            moving: None,
            ..self.clone()
        }
    }

    pub(crate) fn with_cleared(&self, locked: LockedBlocks, rows_cleared: u32) -> Self {
        Self {
            locked,
            score: self.score.saturating_add(rows_cleared),
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}
