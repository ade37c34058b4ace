//! Board - the persistent stack of landed cells.
//!
//! The grid lives behind a reader/writer lock: the game loop is the sole
//! writer, while render-side readers may take snapshots concurrently.
//! Every accessor is bounds-checked; there is no "caller must have
//! validated" primitive.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::grid::Grid;
use crate::types::{Location, State};

/// The grid where pieces land and rows compact.
#[derive(Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    grid: RwLock<Grid>,
}

impl Board {
    /// Create an empty board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            grid: RwLock::new(Grid::new(rows, cols)),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn read(&self) -> RwLockReadGuard<'_, Grid> {
        self.grid.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Grid> {
        self.grid.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether `location` is within the board bounds.
    ///
    /// Dimensions are fixed at construction, so no lock is taken.
    pub fn contains(&self, location: Location) -> bool {
        location.y >= 0
            && (location.y as usize) < self.rows
            && location.x >= 0
            && (location.x as usize) < self.cols
    }

    /// The cell at `location`, or `None` out of range.
    pub fn cell(&self, location: Location) -> Option<State> {
        self.read().get(location)
    }

    /// Whether `shape` can sit at `location`: every filled shape cell must
    /// land in bounds on an empty board cell. Empty shape cells impose no
    /// constraint, even out of bounds.
    ///
    /// This is the sole collision primitive behind every move, rotation,
    /// and placement attempt.
    pub fn test(&self, shape: &Grid, location: Location) -> bool {
        let grid = self.read();
        let mut ok = true;
        shape.walk(|row, col, state| {
            if !state.is_filled() {
                return;
            }
            let target = Location::new(location.x + col as i32, location.y + row as i32);
            ok = ok && grid.get(target) == Some(State::Empty);
        });
        ok
    }

    /// Commit a landed shape: each filled cell that is in bounds and still
    /// empty is written; anything else is skipped. A prior successful
    /// [`Board::test`] makes the skips a non-event.
    pub fn stack(&self, shape: &Grid, location: Location) {
        let mut grid = self.write();
        shape.walk(|row, col, state| {
            let target = Location::new(location.x + col as i32, location.y + row as i32);
            if state.is_filled() && grid.get(target) == Some(State::Empty) {
                grid.set(target, state);
            }
        });
    }

    /// A defensive copy of the current stack, safe to retain.
    pub fn state(&self) -> Grid {
        self.read().clone()
    }

    /// Remove every fully-occupied row. Remaining rows settle into the
    /// bottom of a fresh grid, preserving order; empties appear at the top.
    /// Returns the number of removed rows. A board with no full rows is
    /// left bit-for-bit unchanged.
    pub fn compact(&self) -> usize {
        let mut grid = self.write();
        let mut result = grid.zero();
        let mut line = self.rows;
        let mut removed = 0;
        for row in (0..self.rows).rev() {
            if grid.row(row).contains(&State::Empty) {
                line -= 1;
                result.row_mut(line).copy_from_slice(grid.row(row));
            } else {
                removed += 1;
            }
        }
        *grid = result;
        removed
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&self) {
        *self.write() = Grid::new(self.rows, self.cols);
    }
}
