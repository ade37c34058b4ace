//! Terminal gameplay entrypoint.
//!
//! Wires the input pump, the terminal renderer, and the game loop together.
//! The loop runs on the main thread; input is read on its own thread and
//! either side can raise the shared stop flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use anyhow::Result;

use blockfall::core::Game;
use blockfall::input::spawn_input_thread;
use blockfall::term::TerminalRenderer;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();
    let input = spawn_input_thread(tx, Arc::clone(&stop));

    Game::new(&mut term, rx, Arc::clone(&stop)).run();

    // The game may have ended on its own (top-out); tell the input pump.
    stop.store(true, Ordering::Relaxed);
    let _ = input.join();

    term.exit()
}
