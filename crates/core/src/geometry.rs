//! Geometry helpers: offsets → absolute cells.

use crate::game_state::MovingPiece;
use crate::pieces::PieceShape;
use crate::types::Cell;

/// Translate every offset by `position`.
pub fn translate(offsets: &[Cell], position: Cell) -> Vec<Cell> {
    offsets.iter().map(|&c| c.offset_by(position)).collect()
}

/// Absolute cells covered by a piece, or `None` when there is no piece.
pub fn piece_cells(piece: Option<&MovingPiece>) -> Option<PieceShape> {
    let piece = piece?;
    let position = piece.position;
    Some(piece.offsets().map(|c| c.offset_by(position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, ShapeId};

    #[test]
    fn translate_adds_position() {
        let offsets = [Cell::new(0, 0), Cell::new(1, 1)];
        assert_eq!(
            translate(&offsets, Cell::new(8, 3)),
            vec![Cell::new(8, 3), Cell::new(9, 4)]
        );
    }

    #[test]
    fn translate_empty_is_empty() {
        assert!(translate(&[], Cell::new(4, 4)).is_empty());
    }

    #[test]
    fn piece_cells_without_piece_is_none() {
        assert_eq!(piece_cells(None), None);
    }

    #[test]
    fn piece_cells_for_bar() {
        let piece = MovingPiece::new(ShapeId::I, Orientation::R1, Cell::new(2, 5));
        assert_eq!(
            piece_cells(Some(&piece)),
            Some([
                Cell::new(2, 5),
                Cell::new(2, 6),
                Cell::new(2, 7),
                Cell::new(2, 8)
            ])
        );
    }
}
