//! The game loop: timed gravity interleaved with asynchronous controls.
//!
//! One thread runs the loop and is the sole writer of game state. Other
//! threads may snapshot the shared [`GameBoard`] concurrently; the loop
//! itself blocks only on the control channel, bounded by the gravity
//! deadline, and observes the stop flag once per iteration.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::gameboard::GameBoard;
use crate::core::piece::{Control, Piece};
use crate::core::snapshot::{GameSnapshot, Renderer};
use crate::types::{
    Direction, BASE_TICK_MS, BOARD_COLS, BOARD_ROWS, LEVEL_STEP_MS, LINES_PER_LEVEL, MIN_TICK_MS,
};

/// The block-stacking game: board controller, level and line bookkeeping,
/// and the gravity/input loop.
pub struct Game<'r> {
    board: Arc<GameBoard>,
    renderer: &'r mut dyn Renderer,
    controls: Receiver<Control>,
    stop: Arc<AtomicBool>,
    lines: usize,
    level: u32,
    base_tick: Duration,
    tick: Duration,
}

impl<'r> Game<'r> {
    /// A standard 20x10 game at level 1 with a one-second base gravity tick.
    pub fn new(
        renderer: &'r mut dyn Renderer,
        controls: Receiver<Control>,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self::with_board(
            GameBoard::new(BOARD_ROWS, BOARD_COLS),
            Duration::from_millis(BASE_TICK_MS),
            renderer,
            controls,
            stop,
        )
    }

    /// A game over a caller-built controller with a custom base tick.
    pub fn with_board(
        board: GameBoard,
        base_tick: Duration,
        renderer: &'r mut dyn Renderer,
        controls: Receiver<Control>,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            board: Arc::new(board),
            renderer,
            controls,
            stop,
            lines: 0,
            level: 1,
            base_tick,
            tick: base_tick,
        }
    }

    /// Shared handle to the controller, for concurrent snapshot readers.
    pub fn game_board(&self) -> Arc<GameBoard> {
        Arc::clone(&self.board)
    }

    /// Run until top-out, cancellation, or control-source disconnect.
    pub fn run(mut self) {
        let mut piece = match self.board.next() {
            Some(piece) => piece,
            None => return,
        };
        self.renderer.clear();
        let mut deadline = Instant::now() + self.tick;

        loop {
            if self.stop.load(Ordering::Relaxed) {
                return;
            }
            let timeout = deadline.saturating_duration_since(Instant::now());
            match self.controls.recv_timeout(timeout) {
                Ok(control) => {
                    // A failed control simply leaves the piece in place.
                    self.board.apply(&mut piece, &[control]);
                    self.push(&piece);
                }
                Err(RecvTimeoutError::Timeout) => {
                    let mut game_over = false;
                    if !self.board.apply(&mut piece, &[Control::Move(Direction::Down)]) {
                        // Landed: commit, compact, respawn, re-pace gravity.
                        self.board.stack(&piece.grid, piece.location);
                        self.lines += self.board.compact();
                        piece = match self.board.next() {
                            Some(piece) => piece,
                            None => return,
                        };
                        game_over = self.board.is_top_out(&piece);
                        self.tick = self.next_tick();
                    }
                    deadline = Instant::now() + self.tick;
                    self.push(&piece);
                    if game_over {
                        self.renderer.clear();
                        return;
                    }
                }
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }

    /// Advance the level if the cleared-line total warrants it, then return
    /// the gravity period for the current level, clamped to the floor.
    fn next_tick(&mut self) -> Duration {
        if self.lines / LINES_PER_LEVEL >= self.level as usize {
            self.level += 1;
        }
        let base = self.base_tick.as_millis() as i64;
        let ms = base - LEVEL_STEP_MS as i64 * self.level as i64;
        Duration::from_millis(ms.max(MIN_TICK_MS as i64) as u64)
    }

    fn push(&mut self, piece: &Piece) {
        self.renderer.update(GameSnapshot {
            board: self.board.state(),
            current: piece.clone(),
            next: self.board.preview(),
            lines: self.lines,
            level: self.level,
        });
    }
}
