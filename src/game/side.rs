use super::board::Cell;

/// One of the two marker identities. White always opens a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The side that moves first after construction or a restart.
    pub const STARTING: Side = Side::White;

    /// The opponent, whose turn follows this side's placement
    pub fn other(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The marker this side leaves on the board
    pub fn to_cell(self) -> Cell {
        match self {
            Side::White => Cell::White,
            Side::Black => Cell::Black,
        }
    }
}

/// Capitalized side name, as shown in the game-over title ("White won!").
impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Side::White => "White",
            Side::Black => "Black",
        })
    }
}
