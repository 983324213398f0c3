use crate::config::UiConfig;
use crate::game::{Cell, GameEngine, Side};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use super::board_widget::TileView;
use super::game_view::{self, GameScreen};

pub struct App {
    engine: GameEngine,
    /// Tile states as last reported by the engine's cell observers
    tiles: Rc<RefCell<Vec<Cell>>>,
    /// Winner reported by the game-over observer, cleared when dismissed
    game_over: Rc<RefCell<Option<Side>>>,
    cursor: usize,
    should_quit: bool,
    message: Option<String>,
    config: UiConfig,
}

impl App {
    /// Take ownership of `engine` and subscribe to every cell and to game over.
    pub fn new(mut engine: GameEngine, config: UiConfig) -> Self {
        let tiles = Rc::new(RefCell::new(engine.board().cells().to_vec()));
        for index in 0..engine.len() {
            let tiles = Rc::clone(&tiles);
            engine.on_cell_change(index, move |change| {
                tiles.borrow_mut()[change.index] = change.state;
            });
        }

        let game_over = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&game_over);
        engine.on_game_over(move |winner| {
            *slot.borrow_mut() = Some(winner);
        });

        // Start in the middle
        let cursor = engine.board().index_of(engine.height() / 2, engine.width() / 2);

        App {
            engine,
            tiles,
            game_over,
            cursor,
            should_quit: false,
            message: None,
            config,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(self.config.poll_interval_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if self.modal_open() {
            match key.code {
                KeyCode::Char('r') => self.restart(),
                KeyCode::Esc => *self.game_over.borrow_mut() = None,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let board = self.engine.board();
        let row = board.row_of(self.cursor) as isize + d_row;
        let col = board.col_of(self.cursor) as isize + d_col;
        let row = row.clamp(0, board.height() as isize - 1) as usize;
        let col = col.clamp(0, board.width() as isize - 1) as usize;
        self.cursor = board.index_of(row, col);
    }

    /// Place the current side's marker under the cursor
    fn place(&mut self) {
        match self.engine.place_move(self.cursor) {
            Ok(placement) if placement.winner.is_none() && self.engine.is_board_full() => {
                self.message = Some("Board is full! Press 'r' to restart.".to_string());
            }
            Ok(_) => {}
            Err(err) => self.message = Some(capitalize(&err.to_string())),
        }
    }

    fn restart(&mut self) {
        self.engine.restart();
        *self.game_over.borrow_mut() = None;
        self.message = Some("New game started!".to_string());
    }

    fn modal_open(&self) -> bool {
        self.game_over.borrow().is_some()
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let tiles = self.tiles.borrow();
        let legal = self
            .config
            .show_legal_moves
            .then(|| self.engine.legal_moves());
        let screen = GameScreen {
            board: TileView {
                tiles: &tiles,
                width: self.engine.width(),
                cursor: self.cursor,
                legal: legal.as_deref(),
            },
            height: self.engine.height(),
            turn: self.engine.turn(),
            winner: self.engine.winner(),
            move_count: self.engine.move_count(),
            message: self.message.as_deref(),
            modal: *self.game_over.borrow(),
        };
        game_view::render(frame, &screen);
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
