//! Core module - the simulation engine, free of any I/O.
//!
//! Grid and board primitives, the tetromino shape model, the placement
//! controller, and the gravity/input game loop.

pub mod board;
pub mod game;
pub mod gameboard;
pub mod grid;
pub mod piece;
pub mod snapshot;
pub mod tetromino;

pub use board::Board;
pub use game::Game;
pub use gameboard::GameBoard;
pub use grid::Grid;
pub use piece::{Control, Piece};
pub use snapshot::{GameSnapshot, Renderer};
pub use tetromino::Tetromino;
