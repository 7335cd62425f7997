//! Results of attempting a move.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Tagged result of [`Game::play_round`](super::Game::play_round).
///
/// Serializes as `{"status": "...", "winner"?: ..., "player"?: ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RoundOutcome {
    /// The game had already concluded; the move was ignored.
    #[display("Game is already over")]
    Over,
    /// The cell was occupied or does not exist; the move was ignored.
    #[display("Cell is unavailable")]
    Invalid,
    /// The move completed a line.
    #[display("{winner} wins")]
    Win {
        /// Player who placed the last mark.
        winner: Player,
    },
    /// The move filled the board without completing a line.
    #[display("It's a tie")]
    Tie,
    /// The turn passed to the other player.
    #[display("{player} to move")]
    Next {
        /// Player whose turn it now is.
        player: Player,
    },
}

impl RoundOutcome {
    /// Returns true if the move was not applied.
    pub fn is_rejected(&self) -> bool {
        matches!(self, RoundOutcome::Over | RoundOutcome::Invalid)
    }

    /// Returns true if this move ended the game.
    pub fn is_final(&self) -> bool {
        matches!(self, RoundOutcome::Win { .. } | RoundOutcome::Tie)
    }

    /// Returns the winner, if the move won the game.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            RoundOutcome::Win { winner } => Some(winner),
            _ => None,
        }
    }
}
