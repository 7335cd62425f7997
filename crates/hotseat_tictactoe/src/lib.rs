//! Pure tic-tac-toe game logic for two players sharing one device.
//!
//! # Architecture
//!
//! - **Board**: owns the nine cells; the only place marks are written
//! - **Rules**: win and draw detection over a board
//! - **Game**: turn order, move legality and [`RoundOutcome`] reporting
//! - **Invariants**: properties the controller upholds between moves
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{Game, RoundOutcome};
//!
//! let mut game = Game::with_players(Some("Ada"), None);
//! assert!(matches!(game.play_round(4), RoundOutcome::Next { .. }));
//! assert_eq!(game.play_round(4), RoundOutcome::Invalid);
//! assert_eq!(game.current_player().name(), "Player 2");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use board::{Board, CELL_COUNT};
pub use game::{Game, Phase};
pub use outcome::RoundOutcome;
pub use position::Position;
pub use types::{Cell, DEFAULT_NAME_A, DEFAULT_NAME_B, Mark, Player};
