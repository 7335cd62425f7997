//! Terminal UI for hotseat.

mod app;
mod input;
mod name_form;
mod ui;

pub use app::{App, AppAction, Screen, TIE_MESSAGE, turn_message, win_message};
pub use input::move_cursor;
pub use name_form::{Field, FormEvent, MAX_NAME_LEN, NameForm};
pub use ui::{cell_areas, cell_at, draw};

use crate::config::HotseatConfig;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

/// Run the TUI until the players quit.
#[instrument(skip_all)]
pub fn run_tui(config: &HotseatConfig) -> Result<()> {
    info!("Starting hotseat TUI");

    enable_raw_mode()?;
    let mut terminal = restore_on_error(enter_terminal, || {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        let _ = disable_raw_mode();
    })?;

    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Runs `setup`, undoing partial terminal changes if it fails.
fn restore_on_error<T>(setup: impl FnOnce() -> Result<T>, restore: impl FnOnce()) -> Result<T> {
    setup().inspect_err(|err| {
        error!(error = ?err, "Terminal setup failed");
        restore();
    })
}

/// One state transition per input event.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, &app))?.area;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    info!("Interrupted");
                    return Ok(());
                }
                if app.handle_key(key.code) == AppAction::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = cell_at(area, mouse.column, mouse.row) {
                    app.click(index);
                }
            }
            _ => {}
        }
    }
}
