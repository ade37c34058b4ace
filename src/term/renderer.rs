//! TerminalRenderer: draws game snapshots onto a real terminal.
//!
//! Full overdraw every frame; each frame writes the same screen regions, so
//! no diffing layer is needed at this scale.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::{GameSnapshot, Renderer};
use crate::term::view;
use crate::types::{Location, State};

/// Terminal rows reserved for the NEXT preview column.
const PREVIEW_PANEL_ROWS: usize = 18;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            entered: false,
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        self.entered = true;
        Ok(())
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn draw(&mut self, state: &GameSnapshot) -> Result<()> {
        let display = view::compose(state);
        let (rows, cols) = display.size();

        self.draw_border(rows, cols)?;

        // Board cells, two terminal columns per cell.
        for row in 0..rows {
            self.stdout.queue(cursor::MoveTo(1, 1 + row as u16))?;
            for col in 0..cols {
                let cell = display
                    .get(Location::new(col as i32, row as i32))
                    .unwrap_or(State::Empty);
                match view::state_color(cell) {
                    Some(color) => {
                        self.stdout.queue(SetForegroundColor(color))?;
                        self.stdout.queue(Print("██"))?;
                    }
                    None => {
                        self.stdout.queue(ResetColor)?;
                        self.stdout.queue(Print(" ·"))?;
                    }
                }
            }
        }
        self.stdout.queue(ResetColor)?;

        self.draw_panel(state, cols)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn draw_border(&mut self, rows: usize, cols: usize) -> Result<()> {
        let w = cols as u16 * 2;
        let h = rows as u16;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print("┌"))?;
        for _ in 0..w {
            self.stdout.queue(Print("─"))?;
        }
        self.stdout.queue(Print("┐"))?;
        for row in 0..h {
            self.stdout.queue(cursor::MoveTo(0, 1 + row))?;
            self.stdout.queue(Print("│"))?;
            self.stdout.queue(cursor::MoveTo(1 + w, 1 + row))?;
            self.stdout.queue(Print("│"))?;
        }
        self.stdout.queue(cursor::MoveTo(0, 1 + h))?;
        self.stdout.queue(Print("└"))?;
        for _ in 0..w {
            self.stdout.queue(Print("─"))?;
        }
        self.stdout.queue(Print("┘"))?;
        Ok(())
    }

    fn draw_panel(&mut self, state: &GameSnapshot, board_cols: usize) -> Result<()> {
        let panel_x = board_cols as u16 * 2 + 4;
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::MoveTo(panel_x, 1))?;
        self.stdout.queue(Print("LINES"))?;
        self.stdout.queue(cursor::MoveTo(panel_x, 2))?;
        self.stdout.queue(Print(format!("{:<8}", state.lines)))?;
        self.stdout.queue(cursor::MoveTo(panel_x, 4))?;
        self.stdout.queue(Print("LEVEL"))?;
        self.stdout.queue(cursor::MoveTo(panel_x, 5))?;
        self.stdout.queue(Print(format!("{:<8}", state.level)))?;
        self.stdout.queue(cursor::MoveTo(panel_x, 7))?;
        self.stdout.queue(Print("NEXT"))?;

        let column = view::preview_column(&state.next);
        let (rows, cols) = column.size();
        for row in 0..PREVIEW_PANEL_ROWS {
            self.stdout.queue(cursor::MoveTo(panel_x, 8 + row as u16))?;
            if row >= rows {
                // Blank out rows left behind by a longer previous preview.
                self.stdout.queue(ResetColor)?;
                self.stdout.queue(Print("          "))?;
                continue;
            }
            for col in 0..cols {
                let cell = column
                    .get(Location::new(col as i32, row as i32))
                    .unwrap_or(State::Empty);
                match view::state_color(cell) {
                    Some(color) => {
                        self.stdout.queue(SetForegroundColor(color))?;
                        self.stdout.queue(Print("█"))?;
                    }
                    None => {
                        self.stdout.queue(ResetColor)?;
                        self.stdout.queue(Print(" "))?;
                    }
                }
            }
            self.stdout.queue(ResetColor)?;
            self.stdout.queue(Print("     "))?;
        }
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Renderer for TerminalRenderer {
    fn update(&mut self, state: GameSnapshot) {
        // Draw failures are not recoverable mid-loop; the terminal is
        // restored on exit either way.
        let _ = self.draw(&state);
    }

    fn clear(&mut self) {
        let _ = self.clear_screen();
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
