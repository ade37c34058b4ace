//! The falling piece and the control algebra applied to it.

use crate::core::board::Board;
use crate::core::grid::Grid;
use crate::core::tetromino::apply_spin;
use crate::types::{Direction, Location, Spin};

/// A falling tetromino instance: a shape grid plus the grid's top-left
/// placement in board coordinates. Transient; rebuilt on every spawn and
/// mutated in place by controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub grid: Grid,
    pub location: Location,
}

/// An operation attempted on a piece against a board.
///
/// Every variant is side-effect-free on failure and reports its outcome as
/// a plain boolean; a failed control is a game event, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Translate one cell; commits only if the new spot is free.
    Move(Direction),
    /// Quarter-turn in place; no wall kicks, the turn fails outright if the
    /// rotated bounding box collides.
    Rotate(Spin),
    /// Move down until blocked. Hitting the floor is the expected
    /// termination, so this always succeeds.
    HardDrop,
}

impl Control {
    /// Attempt this control, mutating `piece` on success.
    pub fn apply(self, board: &Board, piece: &mut Piece) -> bool {
        match self {
            Control::Move(direction) => {
                let candidate = piece.location.shifted(direction);
                if board.test(&piece.grid, candidate) {
                    piece.location = candidate;
                    true
                } else {
                    false
                }
            }
            Control::Rotate(spin) => {
                let rotated = apply_spin(&piece.grid, spin);
                if board.test(&rotated, piece.location) {
                    piece.grid = rotated;
                    true
                } else {
                    false
                }
            }
            Control::HardDrop => {
                while Control::Move(Direction::Down).apply(board, piece) {}
                true
            }
        }
    }
}
