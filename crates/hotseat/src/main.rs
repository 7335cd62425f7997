//! Hotseat - unified CLI.

use anyhow::Result;
use clap::Parser;
use hotseat::{Cli, Command, HotseatConfig};
use hotseat_tictactoe::Game;
use std::io::Write;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = HotseatConfig::load(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Tui {
            player_x,
            player_o,
            skip_names,
        } => {
            let ask_names = *config.ask_names() && !skip_names;
            let config = config.with_names(player_x, player_o).with_ask_names(ask_names);
            run_tui(&config)
        }
        Command::Play {
            moves,
            player_x,
            player_o,
        } => run_play(config.with_names(player_x, player_o), &moves),
    }
}

/// Run the interactive terminal UI
fn run_tui(config: &HotseatConfig) -> Result<()> {
    hotseat::init_file_tracing(config.log_file())?;
    hotseat::tui::run_tui(config)
}

/// Run a scripted move list, JSON to stdout
#[instrument(skip(config))]
fn run_play(config: HotseatConfig, moves: &[usize]) -> Result<()> {
    hotseat::init_stderr_tracing();
    info!("Playing scripted moves");

    let mut game = Game::with_players(config.player_x().as_deref(), config.player_o().as_deref());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hotseat::run_moves(&mut game, moves, &mut out)?;
    writeln!(out, "{}", game.board().display())?;
    Ok(())
}
