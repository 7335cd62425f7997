//! Tests for round-by-round game controller behavior.

use hotseat_tictactoe::rules::WINNING_COMBINATIONS;
use hotseat_tictactoe::{Cell, Game, Mark, Phase, RoundOutcome};

/// Plays `moves` in order and returns every outcome.
fn play(game: &mut Game, moves: &[usize]) -> Vec<RoundOutcome> {
    moves.iter().map(|&i| game.play_round(i)).collect()
}

/// Cells off `line` for player B to fill while player A builds it.
fn fillers_for(line: [usize; 3]) -> Vec<usize> {
    (0..9).filter(|i| !line.contains(i)).take(2).collect()
}

#[test]
fn test_column_win_scenario() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));
    let outcomes = play(&mut game, &[0, 1, 3, 4, 6]);

    match outcomes.last() {
        Some(RoundOutcome::Win { winner }) => {
            assert_eq!(winner.name(), "Ada");
            assert_eq!(winner.mark(), Mark::X);
        }
        other => panic!("expected win, got {other:?}"),
    }
    assert!(game.is_game_over());
    assert_eq!(game.current_player().name(), "Ada", "winner keeps the turn");
}

#[test]
fn test_tie_scenario() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 1, 2, 3, 5, 4, 6, 8, 7]);

    assert!(outcomes[..8].iter().all(|o| matches!(o, RoundOutcome::Next { .. })));
    assert_eq!(outcomes[8], RoundOutcome::Tie);
    assert!(game.is_game_over());
    assert_eq!(game.current_player().mark(), Mark::X, "turn not swapped on tie");
}

#[test]
fn test_occupied_cell_scenario() {
    let mut game = Game::new();

    match game.play_round(0) {
        RoundOutcome::Next { player } => assert_eq!(player.name(), "Player 2"),
        other => panic!("expected next, got {other:?}"),
    }

    let before = game.clone();
    assert_eq!(game.play_round(0), RoundOutcome::Invalid);
    assert_eq!(game, before);
    assert_eq!(game.current_player().mark(), Mark::O);
}

#[test]
fn test_repeated_occupied_moves_change_nothing() {
    let mut game = Game::new();
    play(&mut game, &[4, 0, 8]);
    let before = game.clone();

    for index in [4, 0, 8, 4, 4, 0] {
        assert_eq!(game.play_round(index), RoundOutcome::Invalid);
    }
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_index_is_rejected() {
    let mut game = Game::new();
    for index in [9, 10, 100, usize::MAX] {
        assert_eq!(game.play_round(index), RoundOutcome::Invalid);
    }
    assert_eq!(game, Game::new());
}

#[test]
fn test_moves_after_game_over_are_ignored() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.is_game_over());
    let before = game.clone();

    for index in 0..12 {
        assert_eq!(game.play_round(index), RoundOutcome::Over);
    }
    assert_eq!(game, before);
}

#[test]
fn test_every_winning_combination_wins() {
    for line in WINNING_COMBINATIONS {
        let fillers = fillers_for(line);
        let mut game = Game::new();

        // X plays the line, O plays the fillers in between.
        let moves = [line[0], fillers[0], line[1], fillers[1], line[2]];
        let outcomes = play(&mut game, &moves);

        assert!(
            outcomes[..4].iter().all(|o| matches!(o, RoundOutcome::Next { .. })),
            "line {line:?}: {outcomes:?}"
        );
        assert!(
            matches!(&outcomes[4], RoundOutcome::Win { winner } if winner.mark() == Mark::X),
            "line {line:?}: {outcomes:?}"
        );
        assert!(game.is_game_over());
    }
}

#[test]
fn test_second_player_can_win() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 2, 1, 4, 8, 6]);
    match outcomes.last() {
        Some(RoundOutcome::Win { winner }) => assert_eq!(winner.mark(), Mark::O),
        other => panic!("expected O to win, got {other:?}"),
    }
}

#[test]
fn test_renaming_after_second_player_wins_keeps_the_win() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));
    play(&mut game, &[0, 2, 1, 4, 8, 6]);
    let board = game.board().clone();

    game.set_players(Some("Ada"), Some("Bo"));

    assert!(game.is_game_over(), "set_players leaves the game-over flag");
    assert_eq!(game.board(), &board, "set_players leaves the board");
    assert_eq!(game.current_player().mark(), Mark::X);
    match game.phase() {
        Phase::Won(winner) => {
            assert_eq!(winner.name(), "Bo");
            assert_eq!(winner.mark(), Mark::O);
        }
        other => panic!("expected Bo to have won, got {other:?}"),
    }
    assert_eq!(game.play_round(3), RoundOutcome::Over);
}

#[test]
fn test_deserialized_game_keeps_playing() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));
    play(&mut game, &[0, 4]);

    let value = serde_json::to_value(&game).unwrap();
    let mut loaded: Game = serde_json::from_value(value).unwrap();
    assert_eq!(loaded, game);
    assert!(matches!(loaded.play_round(8), RoundOutcome::Next { .. }));
}

#[test]
fn test_deserialize_rejects_unregistered_current_player() {
    let mut value = serde_json::to_value(Game::new()).unwrap();
    value["current"] = serde_json::json!(2);

    let err = serde_json::from_value::<Game>(value).unwrap_err();
    assert!(err.to_string().contains("out of range"), "{err}");
}

#[test]
fn test_deserialize_rejects_inconsistent_state() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);

    let mut value = serde_json::to_value(&game).unwrap();
    value["game_over"] = serde_json::json!(false);
    assert!(serde_json::from_value::<Game>(value).is_err());

    let mut value = serde_json::to_value(&game).unwrap();
    value["moves_played"] = serde_json::json!(1);
    assert!(serde_json::from_value::<Game>(value).is_err());
}

#[test]
fn test_win_on_last_cell_is_a_win_not_a_tie() {
    let mut game = Game::new();
    // X O X / O X O / O X X, completed by the diagonal through 8.
    let outcomes = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

    assert!(outcomes[..8].iter().all(|o| matches!(o, RoundOutcome::Next { .. })));
    assert!(matches!(outcomes[8], RoundOutcome::Win { .. }), "{outcomes:?}");
    assert!(game.board().is_full());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.reset();

    assert!(game.board().cells().iter().all(|c| *c == Cell::Empty));
    assert!(!game.is_game_over());
    assert_eq!(game.current_player().name(), "Ada");
    assert_eq!(game.moves_played(), 0);
    assert!(matches!(game.play_round(0), RoundOutcome::Next { .. }));
}

#[test]
fn test_mark_count_tracks_accepted_moves() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[4, 4, 0, 9, 8]);
    let accepted = outcomes.iter().filter(|o| !o.is_rejected()).count();
    assert_eq!(accepted, 3);
    assert_eq!(game.board().occupied_count(), accepted);
    assert_eq!(game.moves_played(), accepted);
}

#[test]
fn test_outcome_json_shape() {
    let mut game = Game::with_players(Some("Ada"), Some("Bo"));

    let next = serde_json::to_value(game.play_round(0)).unwrap();
    assert_eq!(
        next,
        serde_json::json!({"status": "next", "player": {"name": "Bo", "mark": "O"}})
    );

    let invalid = serde_json::to_value(game.play_round(0)).unwrap();
    assert_eq!(invalid, serde_json::json!({"status": "invalid"}));

    play(&mut game, &[3, 1, 4]);
    let win = serde_json::to_value(game.play_round(2)).unwrap();
    assert_eq!(
        win,
        serde_json::json!({"status": "win", "winner": {"name": "Ada", "mark": "X"}})
    );

    let over = serde_json::to_value(game.play_round(8)).unwrap();
    assert_eq!(over, serde_json::json!({"status": "over"}));
}
