//! Tetromino shapes and rotation.
//!
//! Each tetromino owns one canonical grid, padded into a square at
//! construction so repeated quarter turns never change the bounding box.

use crate::core::grid::Grid;
use crate::types::{Location, PieceKind, Spin, State};

/// The raw (unpadded) shape matrix for a kind.
fn matrix(kind: PieceKind) -> Grid {
    let x = kind.color();
    let o = State::Empty;
    match kind {
        PieceKind::I => Grid::from_rows(&[&[x, x, x, x]]),
        PieceKind::J => Grid::from_rows(&[&[x, o, o], &[x, x, x]]),
        PieceKind::L => Grid::from_rows(&[&[o, o, x], &[x, x, x]]),
        PieceKind::O => Grid::from_rows(&[&[x, x], &[x, x]]),
        PieceKind::S => Grid::from_rows(&[&[o, x, x], &[x, x, o]]),
        PieceKind::T => Grid::from_rows(&[&[o, x, o], &[x, x, x]]),
        PieceKind::Z => Grid::from_rows(&[&[x, x, o], &[o, x, x]]),
    }
}

/// Canonical placement of the raw shape inside its padded square.
///
/// The I bar sits at (1, 2) so its 5x5 square spins about the bar's own
/// center; every other kind pads from the top-left corner.
fn pad_offset(kind: PieceKind) -> Location {
    match kind {
        PieceKind::I => Location::new(1, 2),
        _ => Location::new(0, 0),
    }
}

/// A falling-block shape with rotation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    kind: PieceKind,
    grid: Grid,
}

impl Tetromino {
    /// Build the canonical square-padded tetromino for `kind`.
    pub fn new(kind: PieceKind) -> Self {
        let raw = matrix(kind);
        let offset = pad_offset(kind);
        let (rows, cols) = raw.size();
        let side = (rows as i32 + offset.y).max(cols as i32 + offset.x) as usize;
        let mut grid = Grid::new(side, side);
        raw.walk(|row, col, state| {
            let target = Location::new(offset.x + col as i32, offset.y + row as i32);
            if grid.contains(target) {
                grid.set(target, state);
            }
        });
        Self { kind, grid }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Apply each spin in order, mutating the stored grid.
    pub fn rotate(&mut self, spins: &[Spin]) {
        for &spin in spins {
            self.grid = apply_spin(&self.grid, spin);
        }
    }

    /// A clone of the canonical grid.
    pub fn shape(&self) -> Grid {
        self.grid.clone()
    }

    /// A clone of the canonical grid with extra spins applied transiently;
    /// the stored grid is left untouched. Used for previews.
    pub fn rotated(&self, spins: &[Spin]) -> Grid {
        let mut result = self.grid.clone();
        for &spin in spins {
            result = apply_spin(&result, spin);
        }
        result
    }
}

/// One quarter turn of a grid.
pub fn apply_spin(grid: &Grid, spin: Spin) -> Grid {
    match spin {
        Spin::Cw => grid.rotate_right(),
        Spin::Ccw => grid.rotate_left(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_pads_to_a_square() {
        for kind in PieceKind::ALL {
            let (rows, cols) = Tetromino::new(kind).shape().size();
            assert_eq!(rows, cols, "{:?} is not square", kind);
        }
    }

    #[test]
    fn i_bar_occupies_row_two_of_its_square() {
        let shape = Tetromino::new(PieceKind::I).shape();
        assert_eq!(shape.size(), (5, 5));
        for col in 1..5 {
            assert_eq!(shape.get(Location::new(col, 2)), Some(State::Cyan));
        }
        assert_eq!(shape.get(Location::new(0, 2)), Some(State::Empty));
    }

    #[test]
    fn rotated_does_not_mutate_canonical_grid() {
        let tetromino = Tetromino::new(PieceKind::T);
        let before = tetromino.shape();
        let _ = tetromino.rotated(&[Spin::Cw]);
        assert_eq!(tetromino.shape(), before);
    }
}
