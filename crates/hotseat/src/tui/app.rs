//! Application state and logic.

use super::input::move_cursor;
use super::name_form::{FormEvent, NameForm};
use crate::config::HotseatConfig;
use crossterm::event::KeyCode;
use hotseat_tictactoe::{Game, Phase, Player, Position, RoundOutcome};
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Entering player names before a game.
    Names(NameForm),
    /// Playing on the board.
    Board,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Status text while waiting for `player` to move.
pub fn turn_message(player: &Player) -> String {
    format!("{}'s turn ({})", player.name(), player.mark())
}

/// Status text after `player` wins.
pub fn win_message(player: &Player) -> String {
    format!("{} wins! 🎉", player.name())
}

/// Status text after a tie.
pub const TIE_MESSAGE: &str = "It's a tie.";

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    screen: Screen,
    status: String,
}

impl App {
    /// Creates the app from configuration.
    #[instrument(skip(config))]
    pub fn new(config: &HotseatConfig) -> Self {
        let game = Game::with_players(config.player_x().as_deref(), config.player_o().as_deref());
        let mut app = Self {
            status: turn_message(game.current_player()),
            game,
            cursor: Position::Center,
            screen: Screen::Board,
        };
        if *config.ask_names() {
            app.open_name_form();
        }
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the visible screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Gets the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press on whichever screen is showing.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match &mut self.screen {
            Screen::Names(form) => {
                match form.handle_key(key) {
                    FormEvent::Editing => {}
                    FormEvent::Submitted => {
                        let form = form.clone();
                        self.submit_names(&form);
                    }
                    FormEvent::Cancelled => self.screen = Screen::Board,
                }
                AppAction::Continue
            }
            Screen::Board => self.handle_board_key(key),
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('n') => self.open_name_form(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor.to_index());
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_key(c) {
                    self.cursor = pos;
                    self.play(pos.to_index());
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        AppAction::Continue
    }

    /// Handles a mouse click on a board cell.
    pub fn click(&mut self, index: usize) {
        if self.screen != Screen::Board {
            return;
        }
        if let Some(pos) = Position::from_index(index) {
            self.cursor = pos;
            self.play(index);
        }
    }

    /// Plays a round and updates the status line.
    ///
    /// Rejected moves change nothing, status included.
    pub fn play(&mut self, index: usize) -> RoundOutcome {
        let outcome = self.game.play_round(index);
        debug!(index, %outcome, "Round played");
        match &outcome {
            RoundOutcome::Win { winner } => self.status = win_message(winner),
            RoundOutcome::Tie => self.status = TIE_MESSAGE.to_string(),
            RoundOutcome::Next { player } => self.status = turn_message(player),
            RoundOutcome::Invalid | RoundOutcome::Over => {}
        }
        outcome
    }

    /// Restarts the game with the same players.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.status = turn_message(self.game.current_player());
    }

    /// Shows the name form, prefilled with the current names.
    pub fn open_name_form(&mut self) {
        let [x, o] = self.game.players();
        self.screen = Screen::Names(NameForm::new(x.name(), o.name()));
    }

    fn submit_names(&mut self, form: &NameForm) {
        self.game.set_players(Some(form.player_x()), Some(form.player_o()));
        self.restart();
        self.screen = Screen::Board;
    }

    /// Board cells to highlight as the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.game.phase() {
            Phase::Won(_) => hotseat_tictactoe::rules::winning_line(self.game.board()),
            Phase::AwaitingMove | Phase::Tied => None,
        }
    }
}
