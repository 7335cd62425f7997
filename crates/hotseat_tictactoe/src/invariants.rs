//! First-class invariants for the game controller.
//!
//! Invariants are logical properties that must hold between moves. The
//! controller asserts them in debug builds after every accepted move, and
//! tests can check them directly.

use super::game::Game;
use super::rules;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The current player is one of the two registered players, and the
/// two players hold different marks.
pub struct CurrentPlayerRegistered;

impl Invariant<Game> for CurrentPlayerRegistered {
    fn holds(game: &Game) -> bool {
        let [a, b] = game.players();
        a.mark() != b.mark() && game.players().contains(game.current_player())
    }

    fn description() -> &'static str {
        "Current player must be one of the two registered players"
    }
}

/// The game is over exactly when the board has a line or is full.
pub struct GameOverMatchesBoard;

impl Invariant<Game> for GameOverMatchesBoard {
    fn holds(game: &Game) -> bool {
        let finished =
            rules::check_winner(game.board()).is_some() || rules::is_full(game.board());
        game.is_game_over() == finished
    }

    fn description() -> &'static str {
        "Game-over flag must match a completed line or a full board"
    }
}

/// Every accepted move left exactly one mark on the board.
pub struct MarkCountMatchesMoves;

impl Invariant<Game> for MarkCountMatchesMoves {
    fn holds(game: &Game) -> bool {
        game.board().occupied_count() == game.moves_played()
    }

    fn description() -> &'static str {
        "Marked cell count must equal the number of moves played"
    }
}

/// All controller invariants.
pub type GameInvariants = (
    CurrentPlayerRegistered,
    GameOverMatchesBoard,
    MarkCountMatchesMoves,
);

/// Checks every controller invariant against `game`.
pub fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    <GameInvariants as InvariantSet<Game>>::check_all(game)
}
