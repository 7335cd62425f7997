//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Placeholder name for the first player when none is supplied.
pub const DEFAULT_NAME_A: &str = "Player 1";

/// Placeholder name for the second player when none is supplied.
pub const DEFAULT_NAME_B: &str = "Player 2";

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark of the first player (moves first).
    X,
    /// Mark of the second player.
    O,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// A named participant holding one of the two marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{name} ({mark})")]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player with the given name and mark.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Creates a player, substituting `fallback` for an absent or blank name.
    pub fn named_or(name: Option<&str>, fallback: &str, mark: Mark) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(fallback);
        Self::new(name, mark)
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}
