//! Board module - the set of locked blocks
//!
//! Locked blocks are absolute cells that have settled. The set is
//! append-only except during line-clear compaction, and never holds the same
//! cell twice. Coordinates: column grows to the right, row grows downward.

use std::collections::BTreeSet;

use crate::types::Cell;

/// Cells already settled at the bottom of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LockedBlocks {
    cells: BTreeSet<Cell>,
}

impl LockedBlocks {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Insert a cell. Returns false if it was already locked.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Append cells, skipping any that are already locked.
    pub fn extend(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.cells.extend(cells);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Number of locked cells in `row`.
    pub fn row_count(&self, row: i32) -> usize {
        self.cells.iter().filter(|c| c.row == row).count()
    }

    /// Smallest and largest occupied row, if any.
    pub fn row_span(&self) -> Option<(i32, i32)> {
        let min = self.cells.iter().map(|c| c.row).min()?;
        let max = self.cells.iter().map(|c| c.row).max()?;
        Some((min, max))
    }
}

impl FromIterator<Cell> for LockedBlocks {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LockedBlocks {
    type Item = &'a Cell;
    type IntoIter = std::collections::btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
