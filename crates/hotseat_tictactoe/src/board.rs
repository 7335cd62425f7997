//! The 3x3 grid and the only code allowed to write to it.

use super::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `mark` at `index` if that cell is empty.
    ///
    /// Returns `false` without touching the board when the cell is
    /// occupied or the index is outside 0-8.
    #[instrument(skip(self))]
    pub fn set_mark(&mut self, index: usize, mark: Mark) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Marked(mark);
                true
            }
            Some(_) => {
                debug!("Cell already occupied");
                false
            }
            None => {
                debug!("Index out of range");
                false
            }
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show the key (1-9) that plays them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_set_mark_on_empty_cell() {
        let mut board = Board::new();
        assert!(board.set_mark(4, Mark::X));
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_set_mark_on_occupied_cell_fails() {
        let mut board = Board::new();
        assert!(board.set_mark(4, Mark::X));
        assert!(!board.set_mark(4, Mark::O));
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_set_mark_out_of_range_fails_closed() {
        let mut board = Board::new();
        assert!(!board.set_mark(9, Mark::X));
        assert!(!board.set_mark(usize::MAX, Mark::O));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X);
        board.set_mark(8, Mark::O);
        board.reset();
        assert_eq!(board, Board::new());
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_shows_keys_for_empty_cells() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X);
        board.set_mark(4, Mark::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
