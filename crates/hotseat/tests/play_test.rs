//! Tests for scripted play and command-line parsing.

use clap::Parser;
use hotseat::{Cli, Command, run_moves};
use hotseat_tictactoe::{Game, RoundOutcome};
use serde_json::Value;

fn json_lines(bytes: &[u8]) -> Vec<Value> {
    String::from_utf8(bytes.to_vec())
        .expect("Output should be UTF-8")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect()
}

#[test]
fn test_run_moves_reports_each_outcome() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));
    let mut out = Vec::new();
    let outcomes = run_moves(&mut game, &[0, 1, 3, 4, 6], &mut out).expect("Run should succeed");

    let lines = json_lines(&out);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["status"], "next");
    assert_eq!(lines[0]["player"]["name"], "Bo");
    assert_eq!(lines[4]["status"], "win");
    assert_eq!(lines[4]["winner"]["name"], "Ada");
    assert!(matches!(outcomes[4], RoundOutcome::Win { .. }));
}

#[test]
fn test_run_moves_reports_invalid_and_over() {
    let mut game = Game::new();
    let mut out = Vec::new();
    run_moves(&mut game, &[0, 0, 42, 1, 3, 4, 6, 8], &mut out).expect("Run should succeed");

    let statuses: Vec<String> = json_lines(&out)
        .iter()
        .map(|v| v["status"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(
        statuses,
        ["next", "invalid", "invalid", "next", "next", "next", "win", "over"]
    );
}

#[test]
fn test_run_moves_tie() {
    let mut game = Game::new();
    let mut out = Vec::new();
    let outcomes =
        run_moves(&mut game, &[0, 1, 2, 3, 5, 4, 6, 8, 7], &mut out).expect("Run should succeed");
    assert_eq!(outcomes.last(), Some(&RoundOutcome::Tie));
    assert_eq!(json_lines(&out).last().map(|v| v["status"].clone()), Some("tie".into()));
}

#[test]
fn test_cli_defaults_to_tui() {
    let cli = Cli::try_parse_from(["hotseat"]).expect("Parse should succeed");
    assert_eq!(cli.command.unwrap_or_default(), Command::default());
    assert_eq!(cli.config.to_str(), Some("hotseat.toml"));
}

#[test]
fn test_cli_play_accepts_indices_and_labels() {
    let cli = Cli::try_parse_from([
        "hotseat",
        "play",
        "--moves",
        "0,center,8,12",
        "--player-x",
        "Ada",
    ])
    .expect("Parse should succeed");

    match cli.command {
        Some(Command::Play {
            moves, player_x, ..
        }) => {
            assert_eq!(moves, [0, 4, 8, 12]);
            assert_eq!(player_x.as_deref(), Some("Ada"));
        }
        other => panic!("expected play command, got {other:?}"),
    }
}

#[test]
fn test_cli_play_rejects_unknown_label() {
    assert!(Cli::try_parse_from(["hotseat", "play", "--moves", "0,nowhere"]).is_err());
    assert!(Cli::try_parse_from(["hotseat", "play"]).is_err());
}

#[test]
fn test_cli_play_rejects_negative_index() {
    assert!(Cli::try_parse_from(["hotseat", "play", "--moves", "0,-1"]).is_err());
    assert!(Cli::try_parse_from(["hotseat", "play", "--moves=-1"]).is_err());
}

#[test]
fn test_cli_tui_flags() {
    let cli = Cli::try_parse_from([
        "hotseat",
        "--config",
        "custom.toml",
        "tui",
        "--player-o",
        "Bo",
        "--skip-names",
    ])
    .expect("Parse should succeed");
    assert_eq!(cli.config.to_str(), Some("custom.toml"));
    assert_eq!(
        cli.command,
        Some(Command::Tui {
            player_x: None,
            player_o: Some("Bo".to_string()),
            skip_names: true,
        })
    );
}
