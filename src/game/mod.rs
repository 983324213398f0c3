//! Core game logic: board representation, edge geometry, the placement and
//! win rules, observer registries, and the engine that ties them together.

mod board;
mod engine;
mod geometry;
mod observer;
mod rules;
mod side;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use engine::{GameEngine, Placement};
pub use geometry::{Axis, EdgeGuard, Geometry, VerticalGuard};
pub use observer::{CellChange, Observers};
pub use rules::{check_axis, check_win, is_adjacent_occupied, RulesConfig};
pub use side::Side;
