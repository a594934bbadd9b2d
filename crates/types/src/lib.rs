//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from core logic, the session engine, and the terminal front end alike.
//!
//! # Grid Dimensions
//!
//! Defaults follow the reference sizing of the game:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 40 rows (indexed 0-39, row 0 at the top)
//! - **Spawn column**: 8, row 0
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 300 | Interval between automatic descents |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, Orientation, ShapeId};
//!
//! let shape = ShapeId::from_index(3).unwrap();
//! assert_eq!(shape, ShapeId::T);
//!
//! assert_eq!(Orientation::R3.rotate_cw(), Orientation::R0);
//!
//! let action = GameAction::from_str("shiftLeft").unwrap();
//! assert_eq!(action, GameAction::ShiftLeft);
//! ```

/// Default grid width in cells (20 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default grid height in cells (40 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 40;

/// Default column a new piece spawns at
pub const DEFAULT_SPAWN_COLUMN: u16 = 8;

/// Default automatic descent interval in milliseconds
pub const DEFAULT_TICK_MS: u32 = 300;

/// Default RNG seed for piece selection
pub const DEFAULT_SEED: u32 = 1;

/// Number of cells in every shape
pub const CELLS_PER_SHAPE: usize = 4;

/// An integer (column, row) pair.
///
/// Used both for absolute grid positions and for offsets relative to a
/// piece anchor. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Elementwise sum of two cells.
    pub const fn offset_by(self, position: Cell) -> Self {
        Self {
            column: self.column + position.column,
            row: self.row + position.row,
        }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((column, row): (i32, i32)) -> Self {
        Self { column, row }
    }
}

/// The five shapes of the game
///
/// Ids follow the catalog order:
/// - **O** (0): 2x2 square
/// - **I** (1): straight bar
/// - **Z** (2): Z-shaped
/// - **T** (3): T-shaped
/// - **S** (4): S-shaped (mirror of Z)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeId {
    O,
    I,
    Z,
    T,
    S,
}

impl ShapeId {
    /// All shapes in id order
    pub const ALL: [ShapeId; 5] = [ShapeId::O, ShapeId::I, ShapeId::Z, ShapeId::T, ShapeId::S];

    /// Look up a shape by its numeric id (0-4)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_index(0), Some(ShapeId::O));
    /// assert_eq!(ShapeId::from_index(4), Some(ShapeId::S));
    /// assert_eq!(ShapeId::from_index(5), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Numeric id (0-4)
    pub fn index(&self) -> u8 {
        match self {
            ShapeId::O => 0,
            ShapeId::I => 1,
            ShapeId::Z => 2,
            ShapeId::T => 3,
            ShapeId::S => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::O => "o",
            ShapeId::I => "i",
            ShapeId::Z => "z",
            ShapeId::T => "t",
            ShapeId::S => "s",
        }
    }
}

/// Rotational state of a shape
///
/// The cycle goes: R0 → R1 → R2 → R3 → R0. Shapes with only two distinct
/// rotations treat R0/R2 and R1/R3 as the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    R0,
    R1,
    R2,
    R3,
}

impl Orientation {
    /// All orientations in index order
    pub const ALL: [Orientation; 4] = [
        Orientation::R0,
        Orientation::R1,
        Orientation::R2,
        Orientation::R3,
    ];

    /// Look up an orientation by index (0-3)
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Index (0-3)
    pub fn index(&self) -> u8 {
        match self {
            Orientation::R0 => 0,
            Orientation::R1 => 1,
            Orientation::R2 => 2,
            Orientation::R3 => 3,
        }
    }

    /// Next orientation, wrapping after R3
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::R0.rotate_cw(), Orientation::R1);
    /// assert_eq!(Orientation::R1.rotate_cw(), Orientation::R2);
    /// assert_eq!(Orientation::R2.rotate_cw(), Orientation::R3);
    /// assert_eq!(Orientation::R3.rotate_cw(), Orientation::R0);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::R0 => Orientation::R1,
            Orientation::R1 => Orientation::R2,
            Orientation::R2 => Orientation::R3,
            Orientation::R3 => Orientation::R0,
        }
    }
}

/// Player actions that can be applied to the game state
///
/// Each action is a discrete event that triggers exactly one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Advance orientation by one step
    Rotate,
    /// Move piece one column left
    ShiftLeft,
    /// Move piece one column right
    ShiftRight,
    /// Move piece one row down, locking it if it lands
    SoftDrop,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("shiftRight"), Some(GameAction::ShiftRight));
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(GameAction::Rotate),
            "shiftleft" => Some(GameAction::ShiftLeft),
            "shiftright" => Some(GameAction::ShiftRight),
            "softdrop" => Some(GameAction::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string (transcript format)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::ShiftLeft => "shiftLeft",
            GameAction::ShiftRight => "shiftRight",
            GameAction::SoftDrop => "softDrop",
        }
    }
}

/// Event driving a single transition: either a timer tick or a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Tick,
    Action(GameAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sizing_defaults() {
        assert_eq!(DEFAULT_GRID_WIDTH, 20);
        assert_eq!(DEFAULT_GRID_HEIGHT, 40);
        assert_eq!(DEFAULT_SPAWN_COLUMN, 8);
        assert_eq!(DEFAULT_TICK_MS, 300);
    }

    #[test]
    fn shape_ids_round_trip_through_index() {
        for shape in ShapeId::ALL {
            assert_eq!(ShapeId::from_index(shape.index()), Some(shape));
        }
    }

    #[test]
    fn orientation_cycle_has_period_four() {
        let mut o = Orientation::R2;
        for _ in 0..4 {
            o = o.rotate_cw();
        }
        assert_eq!(o, Orientation::R2);
    }

    #[test]
    fn action_names_parse_back() {
        for action in [
            GameAction::Rotate,
            GameAction::ShiftLeft,
            GameAction::ShiftRight,
            GameAction::SoftDrop,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn cell_offset_adds_elementwise() {
        assert_eq!(Cell::new(1, 2).offset_by(Cell::new(8, 0)), Cell::new(9, 2));
    }
}
