use super::board_widget::{board_lines, TileView};
use crate::game::Side;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Everything the game screen shows.
pub struct GameScreen<'a> {
    pub board: TileView<'a>,
    pub height: usize,
    pub turn: Side,
    pub winner: Option<Side>,
    pub move_count: usize,
    pub message: Option<&'a str>,
    /// Winner announced by the game-over observer and not yet dismissed
    pub modal: Option<Side>,
}

pub fn render(frame: &mut Frame, screen: &GameScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Min(screen.height as u16 + 2), // Board
            Constraint::Length(3),                     // Message
            Constraint::Length(3),                     // Controls
        ])
        .split(frame.area());

    render_header(frame, screen, chunks[0]);
    render_board(frame, screen, chunks[1]);
    render_message(frame, screen.message, chunks[2]);
    render_controls(frame, chunks[3]);

    if let Some(winner) = screen.modal {
        render_game_over(frame, winner);
    }
}

fn side_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::LightRed,
    }
}

fn render_header(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let (status, color) = match screen.winner {
        Some(winner) => (format!("Game Over  |  {} won", winner), side_color(winner)),
        None => (
            format!("To move: {}  |  Move {}", screen.turn, screen.move_count + 1),
            side_color(screen.turn),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Link Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let board = Paragraph::new(board_lines(&screen.board))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "Arrows/hjkl: Move  |  Enter: Place  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_game_over(frame: &mut Frame, winner: Side) {
    let area = centered_rect(30, 7, frame.area());
    let text = vec![
        Line::from("Game over..."),
        Line::from(""),
        Line::from("R: Restart  |  Esc: Close"),
    ];
    let modal = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} won!", winner))
            .title_style(
                Style::default()
                    .fg(side_color(winner))
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(modal, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
