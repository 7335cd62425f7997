//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// Every line that wins the game, as board indices.
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if `mark` fills some winning combination.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    WINNING_COMBINATIONS
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Cell::Marked(mark))))
}

/// Returns the first winning combination that is uniformly marked.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_COMBINATIONS.iter().copied().find(|&[a, b, c]| {
        let first = board.get(a);
        matches!(first, Some(Cell::Marked(_))) && first == board.get(b) && first == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a)).and_then(Cell::mark)
}
