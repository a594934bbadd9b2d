//! Line clearing: filled-row detection and compaction.
//!
//! Both steps work from one snapshot of the locked blocks. Compaction shifts
//! every surviving cell down by the number of cleared rows below it, so a
//! cell above two cleared rows drops by two.

use std::collections::{BTreeMap, BTreeSet};

use crate::board::LockedBlocks;
use crate::game_state::GameState;
use crate::types::Cell;

/// Rows (ascending) whose every column holds a locked cell.
///
/// Only rows between the lowest and highest occupied row are considered. A
/// row counts as filled when the number of *distinct* in-grid columns equals
/// `grid_width`, so duplicate entries in `locked` never inflate a row.
pub fn filled_rows<'a>(grid_width: u16, locked: impl IntoIterator<Item = &'a Cell>) -> Vec<i32> {
    let width = grid_width as i32;
    let mut columns_by_row: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for cell in locked {
        if (0..width).contains(&cell.column) {
            columns_by_row.entry(cell.row).or_default().insert(cell.column);
        }
    }

    let (Some(&min), Some(&max)) = (
        columns_by_row.keys().next(),
        columns_by_row.keys().next_back(),
    ) else {
        return Vec::new();
    };

    (min..=max)
        .filter(|row| {
            columns_by_row
                .get(row)
                .is_some_and(|cols| cols.len() == grid_width as usize)
        })
        .collect()
}

/// Remove filled rows from `locked` and compact the rest downward.
///
/// Returns the new blocks and the cleared rows.
pub fn compact(grid_width: u16, locked: &LockedBlocks) -> (LockedBlocks, Vec<i32>) {
    let cleared = filled_rows(grid_width, locked);
    if cleared.is_empty() {
        return (locked.clone(), cleared);
    }

    let blocks = locked
        .iter()
        .filter(|c| cleared.binary_search(&c.row).is_err())
        .map(|c| {
            let shift = cleared.iter().filter(|&&r| r > c.row).count() as i32;
            Cell::new(c.column, c.row + shift)
        })
        .collect();

    (blocks, cleared)
}

/// Clear every filled row of `state`, adding one point per cleared row.
pub fn clear_rows(state: &GameState) -> GameState {
    let (locked, cleared) = compact(state.grid_width(), state.locked());
    state.with_cleared(locked, cleared.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(width: i32, row: i32) -> impl Iterator<Item = Cell> {
        (0..width).map(move |c| Cell::new(c, row))
    }

    #[test]
    fn single_full_row_is_detected() {
        let cells: Vec<Cell> = row(4, 5).collect();
        assert_eq!(filled_rows(4, &cells), vec![5]);
    }

    #[test]
    fn duplicates_do_not_fill_a_row() {
        let mut cells: Vec<Cell> = row(3, 5).collect();
        cells.push(Cell::new(0, 5));
        assert!(filled_rows(4, &cells).is_empty());

        cells.push(Cell::new(3, 5));
        assert_eq!(filled_rows(4, &cells), vec![5]);
    }

    #[test]
    fn empty_blocks_have_no_rows() {
        assert!(filled_rows(4, &LockedBlocks::new()).is_empty());
    }

    #[test]
    fn out_of_grid_columns_are_ignored() {
        let mut cells: Vec<Cell> = row(3, 2).collect();
        cells.push(Cell::new(7, 2));
        assert!(filled_rows(4, &cells).is_empty());
    }

    #[test]
    fn cells_above_drop_by_cleared_count_below() {
        // Rows 8 and 9 full: everything above drops by 2.
        let mut locked: LockedBlocks = row(4, 8).chain(row(4, 9)).collect();
        locked.insert(Cell::new(1, 7));
        locked.insert(Cell::new(2, 3));

        let (blocks, cleared) = compact(4, &locked);

        assert_eq!(cleared, vec![8, 9]);
        let got: Vec<Cell> = blocks.iter().copied().collect();
        assert_eq!(got, vec![Cell::new(1, 9), Cell::new(2, 5)]);
    }

    #[test]
    fn split_clears_shift_by_rows_below_only() {
        // Rows 4 and 6 full, row 5 partial, row 7 below everything.
        let mut locked: LockedBlocks = row(4, 4).chain(row(4, 6)).collect();
        locked.insert(Cell::new(0, 5));
        locked.insert(Cell::new(3, 2));
        locked.insert(Cell::new(2, 7));

        let (blocks, cleared) = compact(4, &locked);

        assert_eq!(cleared, vec![4, 6]);
        assert!(blocks.contains(Cell::new(0, 6)));
        assert!(blocks.contains(Cell::new(3, 4)));
        assert!(blocks.contains(Cell::new(2, 7)));
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn clear_rows_scores_one_per_row() {
        let state = GameState::new(4, 10).with_locked(row(4, 5).collect());

        let next = clear_rows(&state);

        assert!(next.locked().is_empty());
        assert_eq!(next.score(), 1);
    }

    #[test]
    fn clear_rows_without_full_rows_is_identity() {
        let state = GameState::new(4, 10).with_locked(row(3, 9).collect());
        assert_eq!(clear_rows(&state), state);
    }
}
