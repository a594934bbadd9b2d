//! Pieces module - shape catalog
//!
//! Fixed lookup tables from `(ShapeId, Orientation)` to the four cell offsets
//! of a shape and to its bounding width. Offsets are `(column, row)` pairs
//! relative to the top-left anchor of the piece and are never negative.
//!
//! Shapes with only two distinct rotations repeat their layout: R0 and R2
//! share one table entry, R1 and R3 the other. The O shape has a single layout.

use crate::types::{Cell, Orientation, ShapeId, CELLS_PER_SHAPE};

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [Cell; CELLS_PER_SHAPE];

const fn shape(offsets: [(i32, i32); CELLS_PER_SHAPE]) -> PieceShape {
    [
        Cell::new(offsets[0].0, offsets[0].1),
        Cell::new(offsets[1].0, offsets[1].1),
        Cell::new(offsets[2].0, offsets[2].1),
        Cell::new(offsets[3].0, offsets[3].1),
    ]
}

const O_ANY: PieceShape = shape([(0, 0), (1, 0), (0, 1), (1, 1)]);

const I_FLAT: PieceShape = shape([(0, 0), (1, 0), (2, 0), (3, 0)]);
const I_UPRIGHT: PieceShape = shape([(0, 0), (0, 1), (0, 2), (0, 3)]);

const Z_FLAT: PieceShape = shape([(0, 0), (1, 0), (1, 1), (2, 1)]);
const Z_UPRIGHT: PieceShape = shape([(1, 0), (0, 1), (1, 1), (0, 2)]);

const T_R0: PieceShape = shape([(0, 0), (1, 0), (2, 0), (1, 1)]);
const T_R1: PieceShape = shape([(0, 1), (1, 0), (1, 1), (1, 2)]);
const T_R2: PieceShape = shape([(1, 0), (0, 1), (1, 1), (2, 1)]);
const T_R3: PieceShape = shape([(2, 1), (1, 0), (1, 1), (1, 2)]);

const S_FLAT: PieceShape = shape([(1, 0), (2, 0), (0, 1), (1, 1)]);
const S_UPRIGHT: PieceShape = shape([(0, 0), (0, 1), (1, 1), (1, 2)]);

/// Get the cell offsets for a shape and orientation
pub fn shape_cells(shape: ShapeId, orientation: Orientation) -> PieceShape {
    use Orientation::*;

    match (shape, orientation) {
        (ShapeId::O, _) => O_ANY,
        (ShapeId::I, R0 | R2) => I_FLAT,
        (ShapeId::I, R1 | R3) => I_UPRIGHT,
        (ShapeId::Z, R0 | R2) => Z_FLAT,
        (ShapeId::Z, R1 | R3) => Z_UPRIGHT,
        (ShapeId::T, R0) => T_R0,
        (ShapeId::T, R1) => T_R1,
        (ShapeId::T, R2) => T_R2,
        (ShapeId::T, R3) => T_R3,
        (ShapeId::S, R0 | R2) => S_FLAT,
        (ShapeId::S, R1 | R3) => S_UPRIGHT,
    }
}

/// Get the tabulated width of a shape in the given orientation.
///
/// This is the value the right-wall check uses. It matches
/// [`shape_extent`] for every entry except `T`/`R3`, where the table says 2
/// although the cells reach column offset 2.
pub fn shape_width(shape: ShapeId, orientation: Orientation) -> i32 {
    use Orientation::*;

    match (shape, orientation) {
        (ShapeId::O, _) => 2,
        (ShapeId::I, R0 | R2) => 4,
        (ShapeId::I, R1 | R3) => 1,
        (ShapeId::Z | ShapeId::T | ShapeId::S, R0 | R2) => 3,
        (ShapeId::Z | ShapeId::T | ShapeId::S, R1 | R3) => 2,
    }
}

/// Max column offset + 1, computed from the cells themselves.
pub fn shape_extent(shape: ShapeId, orientation: Orientation) -> i32 {
    shape_cells(shape, orientation)
        .iter()
        .map(|c| c.column)
        .max()
        .unwrap_or(0)
        + 1
}

/// Widest extent among the given shapes in any orientation.
pub fn max_width(shapes: &[ShapeId]) -> i32 {
    shapes
        .iter()
        .flat_map(|&s| Orientation::ALL.iter().map(move |&o| shape_extent(s, o)))
        .max()
        .unwrap_or(0)
}
