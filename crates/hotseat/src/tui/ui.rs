//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Screen};
use super::name_form::{Field, NameForm};
use hotseat_tictactoe::{Cell, Mark, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const BOARD_HELP: &str = "arrows/1-9 move · enter play · r restart · n names · q quit";
const FORM_HELP: &str = "tab switch field · enter start · esc cancel";

/// Splits the frame into title, main, status and help areas.
fn screen_layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Screen rectangles of the nine cells, in board order.
///
/// Shared by drawing and mouse hit-testing so both agree on the layout.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board = center_rect(screen_layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT);
    std::array::from_fn(|i| {
        let (row, col) = ((i / 3) as u16, (i % 3) as u16);
        Rect::new(
            board.x + col * (CELL_WIDTH + 1),
            board.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area)
    })
}

/// Board index under the terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<usize> {
    cell_areas(area).iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

/// Renders the whole app.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [title_area, main_area, status_area, help_area] = screen_layout(area);

    let title = Paragraph::new("Hotseat - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let help = match app.screen() {
        Screen::Board => {
            draw_board(frame, area, app);
            BOARD_HELP
        }
        Screen::Names(form) => {
            draw_form(frame, main_area, form);
            FORM_HELP
        }
    };

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let cells = cell_areas(area);
    let board = center_rect(screen_layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT);

    // Grid lines between cells
    for i in 1..3u16 {
        let y = board.y + i * (CELL_HEIGHT + 1) - 1;
        let line = Rect::new(board.x, y, BOARD_WIDTH, 1).intersection(area);
        frame.render_widget(
            Paragraph::new("─".repeat(BOARD_WIDTH as usize)).style(Style::default().fg(Color::DarkGray)),
            line,
        );
        let x = board.x + i * (CELL_WIDTH + 1) - 1;
        let column = Rect::new(x, board.y, 1, BOARD_HEIGHT).intersection(area);
        let bar = vec![Line::from("│"); BOARD_HEIGHT as usize];
        frame.render_widget(
            Paragraph::new(bar).style(Style::default().fg(Color::DarkGray)),
            column,
        );
    }

    let winning = app.winning_line();
    let game_over = app.game().is_game_over();
    for (index, rect) in cells.into_iter().enumerate() {
        let cell = app.game().board().get(index).unwrap_or_default();
        let highlighted = winning.is_some_and(|line| line.contains(&index));
        let selected = !game_over && app.cursor() == Position::ALL[index];
        draw_cell(frame, rect, index, cell, game_over, highlighted, selected);
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    cell: Cell,
    game_over: bool,
    highlighted: bool,
    selected: bool,
) {
    let (symbol, mut style) = match cell {
        Cell::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    // Cells that cannot be played are dimmed.
    if !cell.is_empty() || game_over {
        style = style.add_modifier(Modifier::DIM);
    }
    if highlighted {
        style = Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD);
    } else if selected {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let mut lines = vec![Line::from(""); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, style)));
    let paragraph = Paragraph::new(lines)
        .style(if highlighted || selected { style } else { Style::default() })
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &NameForm) {
    let form_area = center_rect(area, 40, 8);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form_area);

    let heading = Paragraph::new("Who's playing?")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, rows[0]);

    draw_field(frame, rows[1], "Player X", form.player_x(), form.focus() == Field::PlayerX);
    draw_field(frame, rows[2], "Player O", form.player_o(), form.focus() == Field::PlayerO);
}

fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused { format!("{value}_") } else { value.to_string() };
    let field = Paragraph::new(text).block(
        Block::default()
            .title(label.to_string())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(field, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
