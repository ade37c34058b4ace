//! Keyboard input layer: key-to-control mapping and the pump thread.

pub mod handler;

pub use handler::{map_key, should_quit, spawn_input_thread};
