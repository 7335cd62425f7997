//! Hotseat - two-player tic-tac-toe on one keyboard.
//!
//! The game rules live in [`hotseat_tictactoe`]; this crate is the front
//! end around them.
//!
//! # Architecture
//!
//! - **Config**: `hotseat.toml`, `HOTSEAT_*` environment overrides
//! - **TUI**: name form, board, status line (ratatui + crossterm)
//! - **Play**: scripted move lists reported as JSON lines
//! - **Logging**: tracing to a file (TUI) or stderr (play)

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod play;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ENV_LOG_FILE, ENV_PLAYER_O, ENV_PLAYER_X, HotseatConfig};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use play::{parse_move, run_moves};
