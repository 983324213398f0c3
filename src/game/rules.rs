//! Placement legality and win detection.

use serde::{Deserialize, Serialize};

use super::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use super::geometry::{Axis, Geometry, VerticalGuard};
use super::side::Side;
use crate::error::ConfigError;

/// Largest accepted board side. Keeps `width * height` well inside `usize`
/// and a board side plus its border inside a `u16` terminal extent.
pub const MAX_SIDE: usize = u16::MAX as usize - 2;

/// Board dimensions and win condition for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub width: usize,
    pub height: usize,
    /// Chain length that wins, counting the placed marker
    pub win_length: usize,
    pub vertical_guard: VerticalGuard,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            win_length: 4,
            vertical_guard: VerticalGuard::Corrected,
        }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::Validation("rules.width must be >= 1".into()));
        }
        if self.height == 0 {
            return Err(ConfigError::Validation("rules.height must be >= 1".into()));
        }
        if self.width > MAX_SIDE || self.height > MAX_SIDE {
            return Err(ConfigError::Validation(format!(
                "rules.width and rules.height must be <= {MAX_SIDE}"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(
                "rules.win_length must be >= 2".into(),
            ));
        }
        if self.win_length > self.width.max(self.height) {
            return Err(ConfigError::Validation(
                "rules.win_length must fit on the board".into(),
            ));
        }
        Ok(())
    }
}

/// Check whether the cell at `index` has an occupied orthogonal neighbor.
///
/// Diagonal neighbors never count.
pub fn is_adjacent_occupied(board: &Board, geometry: &Geometry, index: usize) -> bool {
    geometry
        .orthogonal()
        .into_iter()
        .filter_map(|(delta, guard)| geometry.neighbor(index, delta, guard))
        .any(|n| !board.get(n).is_empty())
}

/// Count the run of `side` markers along `axis` through `index`.
///
/// The count starts at 1 for the cell at `index` itself and extends at most
/// `win_length - 1` cells in each direction. Returns true once the run
/// reaches `win_length`.
pub fn check_axis(
    board: &Board,
    geometry: &Geometry,
    index: usize,
    axis: &Axis,
    side: Side,
    win_length: usize,
) -> bool {
    let target = side.to_cell();
    let mut count = 1;

    for (delta, guard) in axis.directions() {
        let mut pos = index;
        for _ in 0..win_length - 1 {
            match geometry.neighbor(pos, delta, guard) {
                Some(next) if board.get(next) == target => {
                    count += 1;
                    pos = next;
                }
                _ => break,
            }
        }
    }

    count >= win_length
}

/// Check if the marker just placed at `index` by `side` completes a run.
///
/// Axes are scanned horizontal, vertical, `\`, `/`, stopping at the first
/// one that wins.
pub fn check_win(board: &Board, rules: &RulesConfig, index: usize, side: Side) -> bool {
    let geometry = Geometry::new(rules.width, rules.height);
    geometry
        .axes(rules.vertical_guard)
        .iter()
        .any(|axis| check_axis(board, &geometry, index, axis, side, rules.win_length))
}
