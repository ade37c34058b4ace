//! Read-only state snapshots handed to the render surface.

use crate::core::grid::Grid;
use crate::core::piece::Piece;

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// The landed stack (defensive copy).
    pub board: Grid,
    /// The falling piece, shape plus location.
    pub current: Piece,
    /// Upcoming shapes, spawn order.
    pub next: Vec<Grid>,
    /// Cumulative cleared lines.
    pub lines: usize,
    /// Current level, starting at 1.
    pub level: u32,
}

/// Consumer of game state snapshots. Implementations should return quickly;
/// the game loop calls them inline.
pub trait Renderer {
    /// Draw a snapshot of the current game state.
    fn update(&mut self, state: GameSnapshot);
    /// Clear the rendering surface.
    fn clear(&mut self);
}
