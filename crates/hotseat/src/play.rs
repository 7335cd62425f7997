//! Non-interactive play: run a move list, report each outcome.

use anyhow::Result;
use hotseat_tictactoe::{Game, Position, RoundOutcome};
use std::io::Write;
use tracing::{info, instrument};

/// Parses one move token: a board index or a position label.
///
/// Non-negative numbers are passed through unchecked so that out-of-range
/// cells reach the game and come back as `invalid`. Negative numbers are
/// not cell indices at all and are rejected here.
pub fn parse_move(token: &str) -> Result<usize, String> {
    let token = token.trim();
    if let Ok(index) = token.parse::<usize>() {
        return Ok(index);
    }
    if token.parse::<i64>().is_ok() {
        return Err(format!("'{}' is negative; cell indices start at 0", token));
    }
    Position::from_label(token)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is neither a cell index (0-8) nor a position label", token))
}

/// Plays `moves` in order, writing each outcome to `out` as a JSON line.
///
/// Moves after the game ends are still played, and report `over`.
#[instrument(skip(game, out))]
pub fn run_moves(game: &mut Game, moves: &[usize], out: &mut impl Write) -> Result<Vec<RoundOutcome>> {
    let mut outcomes = Vec::with_capacity(moves.len());
    for &index in moves {
        let outcome = game.play_round(index);
        serde_json::to_writer(&mut *out, &outcome)?;
        writeln!(out)?;
        outcomes.push(outcome);
    }
    info!(
        accepted = outcomes.iter().filter(|o| !o.is_rejected()).count(),
        finished_at = ?outcomes.iter().position(RoundOutcome::is_final),
        winner = ?outcomes.iter().find_map(RoundOutcome::winner).map(|p| p.name()),
        game_over = game.is_game_over(),
        "Move list finished"
    );
    Ok(outcomes)
}
