//! Terminal rendering layer.
//!
//! `view` is the pure snapshot-to-display mapping; `renderer` owns the
//! crossterm session and implements the core's `Renderer` trait.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
