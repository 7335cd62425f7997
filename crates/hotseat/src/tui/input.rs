//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use hotseat_tictactoe::Position;

/// Moves cursor based on arrow keys (or hjkl); stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => Position::from_row_col(row, col.wrapping_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::from_row_col(row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => Position::from_row_col(row.wrapping_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}
