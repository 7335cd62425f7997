//! Game controller: turn order, move legality and outcome reporting.

use super::board::Board;
use super::invariants::{self, InvariantViolation};
use super::outcome::RoundOutcome;
use super::rules;
use super::types::{DEFAULT_NAME_A, DEFAULT_NAME_B, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Where the game stands, derived from the controller's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to pick a cell.
    AwaitingMove,
    /// A player completed a line.
    Won(Player),
    /// The board filled without a line.
    Tied,
}

/// Tic-tac-toe controller for one hot-seat session.
///
/// Owns the board and the two players. Player A always holds [`Mark::X`]
/// and moves first. Deserializing rejects state that breaks a controller
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameState")]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    game_over: bool,
    moves_played: usize,
}

impl Game {
    /// Creates a game between "Player 1" and "Player 2".
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(None, None)
    }

    /// Creates a game, substituting placeholders for blank names.
    #[instrument]
    pub fn with_players(name_a: Option<&str>, name_b: Option<&str>) -> Self {
        Self {
            board: Board::new(),
            players: Self::make_players(name_a, name_b),
            current: 0,
            game_over: false,
            moves_played: 0,
        }
    }

    fn make_players(name_a: Option<&str>, name_b: Option<&str>) -> [Player; 2] {
        [
            Player::named_or(name_a, DEFAULT_NAME_A, Mark::X),
            Player::named_or(name_b, DEFAULT_NAME_B, Mark::O),
        ]
    }

    /// Replaces both players and hands the turn to player A.
    ///
    /// Leaves the board and game-over flag alone; callers normally
    /// follow this with [`reset`](Self::reset).
    #[instrument(skip(self))]
    pub fn set_players(&mut self, name_a: Option<&str>, name_b: Option<&str>) {
        self.players = Self::make_players(name_a, name_b);
        self.current = 0;
        info!(
            player_a = %self.players[0].name(),
            player_b = %self.players[1].name(),
            "Players set"
        );
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, A first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the game-over flag.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of marks placed since the last reset.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Returns the current phase of the game.
    ///
    /// The winner is read off the board, so replacing the players after a
    /// win still reports the player holding the winning mark.
    pub fn phase(&self) -> Phase {
        if !self.game_over {
            return Phase::AwaitingMove;
        }
        rules::check_winner(&self.board)
            .and_then(|mark| self.players.iter().find(|p| p.mark() == mark))
            .map_or(Phase::Tied, |winner| Phase::Won(winner.clone()))
    }

    /// Attempts to place the current player's mark at `index`.
    ///
    /// Checks run in a fixed order: game over, cell availability, win,
    /// tie, then the turn passes. Rejected moves leave the game untouched,
    /// including indices outside 0-8.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn play_round(&mut self, index: usize) -> RoundOutcome {
        if self.game_over {
            debug!("Move after game over ignored");
            return RoundOutcome::Over;
        }

        let mark = self.current_player().mark();
        if !self.board.set_mark(index, mark) {
            debug!("Move rejected");
            return RoundOutcome::Invalid;
        }
        self.moves_played += 1;

        let outcome = if rules::has_line(&self.board, mark) {
            self.game_over = true;
            info!(winner = %self.current_player(), "Game won");
            RoundOutcome::Win {
                winner: self.current_player().clone(),
            }
        } else if rules::is_draw(&self.board) {
            self.game_over = true;
            info!("Game tied");
            RoundOutcome::Tie
        } else {
            self.current = 1 - self.current;
            debug!(next = %self.current_player(), "Turn passed");
            RoundOutcome::Next {
                player: self.current_player().clone(),
            }
        };

        debug_assert!(
            invariants::check_all(self).is_ok(),
            "invariant violated after move: {:?}",
            invariants::check_all(self)
        );
        outcome
    }

    /// Clears the board and starts over with player A to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.game_over = false;
        self.moves_played = 0;
        debug!("Game reset");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`Game`].
#[derive(Deserialize)]
struct GameState {
    board: Board,
    players: [Player; 2],
    current: usize,
    game_over: bool,
    moves_played: usize,
}

impl TryFrom<GameState> for Game {
    type Error = InvariantViolation;

    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        if state.current >= state.players.len() {
            return Err(InvariantViolation::new(format!(
                "Current player index {} out of range",
                state.current
            )));
        }
        let game = Self {
            board: state.board,
            players: state.players,
            current: state.current,
            game_over: state.game_over,
            moves_played: state.moves_played,
        };
        invariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}
