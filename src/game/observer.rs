//! Callback registries notified of cell changes and of a decided game.
//!
//! Both registries are append-only. Callbacks run synchronously, in the order
//! they were registered, before the triggering engine call returns.

use super::board::Cell;
use super::side::Side;

/// A cell's new state, delivered to that cell's observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    pub index: usize,
    pub state: Cell,
}

type CellCallback = Box<dyn FnMut(CellChange)>;
type GameOverCallback = Box<dyn FnMut(Side)>;

pub struct Observers {
    cells: Vec<Vec<CellCallback>>,
    game_over: Vec<GameOverCallback>,
}

impl Observers {
    /// Create empty registries for a board of `cells` cells
    pub fn new(cells: usize) -> Self {
        Observers {
            cells: (0..cells).map(|_| Vec::new()).collect(),
            game_over: Vec::new(),
        }
    }

    /// Append a callback to the observer list for `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a cell of the board.
    pub fn on_cell_change(&mut self, index: usize, callback: impl FnMut(CellChange) + 'static) {
        let len = self.cells.len();
        let Some(list) = self.cells.get_mut(index) else {
            panic!("cell index {index} is outside the board ({len} cells)");
        };
        list.push(Box::new(callback));
    }

    pub fn on_game_over(&mut self, callback: impl FnMut(Side) + 'static) {
        self.game_over.push(Box::new(callback));
    }

    /// Invoke every observer registered for `index` with its new state
    pub fn notify_cell(&mut self, index: usize, state: Cell) {
        let change = CellChange { index, state };
        for callback in &mut self.cells[index] {
            callback(change);
        }
    }

    pub fn notify_game_over(&mut self, winner: Side) {
        for callback in &mut self.game_over {
            callback(winner);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field(
                "cell_observers",
                &self.cells.iter().map(Vec::len).sum::<usize>(),
            )
            .field("game_over_observers", &self.game_over.len())
            .finish()
    }
}
