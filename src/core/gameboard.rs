//! GameBoard - the placement controller over a board.
//!
//! Owns the board plus the upcoming-piece queue and applies control
//! sequences to the falling piece. Queue generation uses an owned, seedable
//! generator so piece sequences can be made deterministic in tests.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::board::Board;
use crate::core::grid::Grid;
use crate::core::piece::{Control, Piece};
use crate::core::tetromino::Tetromino;
use crate::types::{Location, PieceKind, State};

/// Refill the queue with a fresh shuffled bag once it drains to this length.
const REFILL_THRESHOLD: usize = 3;

struct PieceQueue {
    upcoming: VecDeque<Tetromino>,
    rng: StdRng,
}

impl PieceQueue {
    /// Append one full set of the seven kinds, randomly permuted, whenever
    /// the queue is running low. Batches interleave at the seam, so two
    /// same-kind pieces can appear back to back across a boundary.
    fn refill(&mut self) {
        if self.upcoming.len() > REFILL_THRESHOLD {
            return;
        }
        let mut batch: Vec<Tetromino> = PieceKind::ALL.iter().map(|&k| Tetromino::new(k)).collect();
        batch.shuffle(&mut self.rng);
        self.upcoming.extend(batch);
    }
}

/// Game-level controller: an owned [`Board`] plus the bag queue.
pub struct GameBoard {
    board: Board,
    queue: RwLock<PieceQueue>,
}

impl GameBoard {
    /// Controller over a fresh board, entropy-seeded queue.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_rng(rows, cols, StdRng::from_entropy())
    }

    /// Controller with an injected generator for deterministic queues.
    pub fn with_rng(rows: usize, cols: usize, rng: StdRng) -> Self {
        Self {
            board: Board::new(rows, cols),
            queue: RwLock::new(PieceQueue {
                upcoming: VecDeque::new(),
                rng,
            }),
        }
    }

    fn queue_read(&self) -> RwLockReadGuard<'_, PieceQueue> {
        self.queue.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn queue_write(&self) -> RwLockWriteGuard<'_, PieceQueue> {
        self.queue.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pop the next tetromino as a spawned piece: shape cloned from the
    /// canonical grid, horizontally centered on the top row. `None` only if
    /// the queue is somehow empty after a refill attempt.
    pub fn next(&self) -> Option<Piece> {
        let mut queue = self.queue_write();
        queue.refill();
        let tetromino = queue.upcoming.pop_front()?;
        let grid = tetromino.shape();
        let (_, width) = grid.size();
        let location = Location::new((self.board.cols() as i32 - width as i32) / 2, 0);
        Some(Piece { grid, location })
    }

    /// Shapes of every queued tetromino, in spawn order, without consuming.
    pub fn preview(&self) -> Vec<Grid> {
        self.queue_read()
            .upcoming
            .iter()
            .map(|t| t.shape())
            .collect()
    }

    /// Apply each control in sequence, stopping at the first failure.
    /// Controls committed before the failing one stay committed; there is
    /// no rollback.
    pub fn apply(&self, piece: &mut Piece, controls: &[Control]) -> bool {
        for &control in controls {
            if !control.apply(&self.board, piece) {
                return false;
            }
        }
        true
    }

    /// Whether the piece, at its given location, overlaps any occupied
    /// in-bounds board cell. Out-of-bounds cells never count. Checked right
    /// after a spawn to detect game over.
    pub fn is_top_out(&self, piece: &Piece) -> bool {
        let mut top_out = false;
        piece.grid.walk(|row, col, state| {
            let target = Location::new(piece.location.x + col as i32, piece.location.y + row as i32);
            if state.is_filled() && matches!(self.board.cell(target), Some(s) if s.is_filled()) {
                top_out = true;
            }
        });
        top_out
    }

    // Pass-through delegation for the board queries collaborators need.

    pub fn contains(&self, location: Location) -> bool {
        self.board.contains(location)
    }

    pub fn cell(&self, location: Location) -> Option<State> {
        self.board.cell(location)
    }

    pub fn test(&self, shape: &Grid, location: Location) -> bool {
        self.board.test(shape, location)
    }

    pub fn stack(&self, shape: &Grid, location: Location) {
        self.board.stack(shape, location)
    }

    pub fn state(&self) -> Grid {
        self.board.state()
    }

    pub fn compact(&self) -> usize {
        self.board.compact()
    }

    pub fn clear(&self) {
        self.board.clear()
    }
}
