//! Replay a fixed move list and write a plain-text transcript.

use std::io::Write;

use crate::error::ReplayError;
use crate::game::{GameEngine, Side};

/// Where a replayed move list left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Side),
    /// Every cell occupied and nobody won
    BoardFull,
    InProgress { to_move: Side },
}

/// Apply `moves` in order and write the transcript to `out`.
///
/// Each rejected move gets a line and is skipped. A winning move announces
/// the winner. The board and the outcome follow the last move. Indices are
/// all checked before anything is placed, so an out-of-range index leaves
/// `engine` untouched and writes nothing.
pub fn replay(
    engine: &mut GameEngine,
    moves: &[usize],
    out: &mut impl Write,
) -> Result<Outcome, ReplayError> {
    if let Some(&index) = moves.iter().find(|&&i| i >= engine.len()) {
        return Err(ReplayError::OutOfRange {
            index,
            width: engine.width(),
            height: engine.height(),
        });
    }

    for &index in moves {
        match engine.place_move(index) {
            Ok(placement) => {
                if let Some(winner) = placement.winner {
                    writeln!(out, "{winner} won!")?;
                }
            }
            Err(err) => writeln!(out, "move {index} rejected: {err}")?,
        }
    }

    write!(out, "{}", engine.board())?;
    let outcome = match engine.winner() {
        Some(winner) => Outcome::Won(winner),
        None if engine.is_board_full() => Outcome::BoardFull,
        None => Outcome::InProgress {
            to_move: engine.turn(),
        },
    };
    match outcome {
        Outcome::Won(_) => {}
        Outcome::BoardFull => writeln!(out, "Board full, no winner")?,
        Outcome::InProgress { to_move } => writeln!(out, "No winner yet, {to_move} to move")?,
    }
    Ok(outcome)
}
