//! Render frame handed to the render consumer after every transition.

use crate::game_state::GameState;

/// Height x width occupancy grid plus score.
///
/// `grid[row][column]` is true when a locked block or the moving piece
/// occupies that cell. Cells outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub grid: Vec<Vec<bool>>,
    pub score: u32,
}

impl Frame {
    pub fn from_state(state: &GameState) -> Self {
        let mut frame = Self::default();
        frame.fill_from(state);
        frame
    }

    /// Rebuild in place, reusing row allocations when the size is unchanged.
    pub fn fill_from(&mut self, state: &GameState) {
        let width = state.grid_width() as usize;
        let height = state.grid_height() as usize;

        self.grid.resize_with(height, Vec::new);
        for row in &mut self.grid {
            row.clear();
            row.resize(width, false);
        }
        self.score = state.score();

        let moving = state.moving_cells();
        for cell in state.locked().iter().chain(moving.iter().flatten()) {
            if cell.column < 0 || cell.row < 0 {
                continue;
            }
            if let Some(slot) = self
                .grid
                .get_mut(cell.row as usize)
                .and_then(|r| r.get_mut(cell.column as usize))
            {
                *slot = true;
            }
        }
    }

    pub fn width(&self) -> usize {
        self.grid.first().map(Vec::len).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn is_filled(&self, column: usize, row: usize) -> bool {
        self.grid
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Plain-text dump: `■` filled, `□` empty, cells separated by spaces.
    pub fn to_text(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&f| if f { "■" } else { "□" })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl GameState {
    pub fn frame(&self) -> Frame {
        Frame::from_state(self)
    }
}
