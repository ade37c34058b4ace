//! Pure snapshot-to-display mapping (no I/O), unit-testable.

use crossterm::style::Color;

use crate::core::{GameSnapshot, Grid};
use crate::types::{Location, State};

/// How many upcoming shapes the side panel shows.
pub const PREVIEW_COUNT: usize = 3;

/// Terminal color for a filled cell category; `None` for `Empty`.
pub fn state_color(state: State) -> Option<Color> {
    let rgb = match state {
        State::Empty => return None,
        State::Red => (220, 80, 80),
        State::Orange => (255, 165, 0),
        State::Yellow => (240, 220, 80),
        State::Green => (100, 220, 120),
        State::Cyan => (80, 220, 220),
        State::Blue => (80, 120, 220),
        State::Purple => (200, 120, 220),
        State::Gray => (140, 140, 140),
        State::Solid => (200, 200, 200),
    };
    Some(Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    })
}

/// The stack with the falling piece overlaid at its location.
pub fn compose(state: &GameSnapshot) -> Grid {
    state
        .board
        .combine(&state.current.grid, state.current.location)
}

/// Upcoming shapes stacked into one column grid, one blank row between
/// consecutive shapes.
pub fn preview_column(next: &[Grid]) -> Grid {
    let mut column = Grid::new(0, 0);
    for shape in next.iter().take(PREVIEW_COUNT) {
        let (rows, _) = column.size();
        let gap = if rows > 0 { 1 } else { 0 };
        column = column.union(shape, Location::new(0, rows as i32 + gap));
    }
    column
}
