use tracing::{debug, info};

use super::board::{Board, Cell};
use super::geometry::Geometry;
use super::observer::{CellChange, Observers};
use super::rules::{check_win, is_adjacent_occupied, RulesConfig};
use super::side::Side;
use crate::error::{ConfigError, MoveError};

/// An accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub side: Side,
    /// Set when this placement decided the game
    pub winner: Option<Side>,
}

/// Owns the board, turn, winner and observer registries for a sequence of
/// games. Created once and reused across games via [`GameEngine::restart`].
#[derive(Debug)]
pub struct GameEngine {
    rules: RulesConfig,
    geometry: Geometry,
    board: Board,
    turn: Side,
    winner: Option<Side>,
    initial_move: bool,
    move_count: usize,
    observers: Observers,
}

impl GameEngine {
    /// Create an engine for the given rules
    pub fn new(rules: RulesConfig) -> Result<Self, ConfigError> {
        rules.validate()?;
        Ok(Self::build(rules))
    }

    /// 13x13 board, four in a row wins
    pub fn standard() -> Self {
        Self::build(RulesConfig::default())
    }

    fn build(rules: RulesConfig) -> Self {
        let geometry = Geometry::new(rules.width, rules.height);
        GameEngine {
            rules,
            geometry,
            board: Board::new(rules.width, rules.height),
            turn: Side::STARTING,
            winner: None,
            initial_move: true,
            move_count: 0,
            observers: Observers::new(geometry.len()),
        }
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Number of cells on the board
    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, index: usize) -> Cell {
        self.board.get(index)
    }

    /// Side to move next. Still flips after the winning move, so it does not
    /// say who would move once [`winner`](Self::winner) is set.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_initial_move(&self) -> bool {
        self.initial_move
    }

    /// Placements accepted since the last restart
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// True when every cell is occupied. A full board with no winner is a
    /// stalemate; no observer is told about it.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Check whether `index` would be accepted, without placing anything.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn check_move(&self, index: usize) -> Result<(), MoveError> {
        let cell = self.board.get(index);
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if !cell.is_empty() {
            return Err(MoveError::Occupied { index });
        }
        if !self.initial_move && !is_adjacent_occupied(&self.board, &self.geometry, index) {
            return Err(MoveError::NotAdjacent { index });
        }
        Ok(())
    }

    /// Every index [`check_move`](Self::check_move) currently accepts
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.check_move(i).is_ok())
            .collect()
    }

    /// Place the current side's marker at `index`.
    ///
    /// A rejected move changes nothing and notifies no one. On acceptance the
    /// cell's observers fire first, then the game-over observers if the move
    /// won, and only then does the turn flip.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn place_move(&mut self, index: usize) -> Result<Placement, MoveError> {
        if let Err(err) = self.check_move(index) {
            debug!(index, side = %self.turn, %err, "move rejected");
            return Err(err);
        }

        let side = self.turn;
        self.initial_move = false;
        self.move_count += 1;
        self.board.set(index, side.to_cell());
        debug!(
            index,
            row = self.board.row_of(index),
            col = self.board.col_of(index),
            %side,
            "move placed"
        );
        self.observers.notify_cell(index, side.to_cell());

        if check_win(&self.board, &self.rules, index, side) {
            self.winner = Some(side);
            info!(%side, moves = self.move_count, "game won");
            self.observers.notify_game_over(side);
        }

        self.turn = side.other();

        Ok(Placement {
            index,
            side,
            winner: self.winner,
        })
    }

    /// Clear the board for a new game and re-notify every cell observer.
    ///
    /// Observer registrations are kept.
    pub fn restart(&mut self) {
        self.initial_move = true;
        self.winner = None;
        self.turn = Side::STARTING;
        self.move_count = 0;
        self.board.reset();

        for index in 0..self.board.len() {
            self.observers.notify_cell(index, Cell::Empty);
        }
        info!("game restarted");
    }

    /// Register a callback for state changes of the cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the board.
    pub fn on_cell_change(&mut self, index: usize, callback: impl FnMut(CellChange) + 'static) {
        self.observers.on_cell_change(index, callback);
    }

    /// Register a callback for the winning side of each decided game
    pub fn on_game_over(&mut self, callback: impl FnMut(Side) + 'static) {
        self.observers.on_game_over(callback);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::standard()
    }
}
