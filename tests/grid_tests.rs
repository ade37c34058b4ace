//! Grid primitive tests.

use blockfall::core::Grid;
use blockfall::types::{Location, State};

fn x() -> State {
    State::Cyan
}

#[test]
fn test_contains_matches_bounds() {
    let grid = Grid::new(3, 5);
    for y in 0..3 {
        for x in 0..5 {
            assert!(grid.contains(Location::new(x, y)), "({}, {})", x, y);
        }
    }
    assert!(!grid.contains(Location::new(-1, 0)));
    assert!(!grid.contains(Location::new(0, -1)));
    assert!(!grid.contains(Location::new(5, 0)));
    assert!(!grid.contains(Location::new(0, 3)));
}

#[test]
fn test_size_reports_dimensions() {
    assert_eq!(Grid::new(4, 7).size(), (4, 7));
    assert_eq!(Grid::new(0, 0).size(), (0, 0));
}

#[test]
fn test_zero_and_clone() {
    let o = State::Empty;
    let mut grid = Grid::new(2, 2);
    grid.set(Location::new(1, 0), x());

    let copy = grid.clone();
    assert_eq!(copy.get(Location::new(1, 0)), Some(x()));

    let zeroed = grid.zero();
    assert_eq!(zeroed.size(), grid.size());
    zeroed.walk(|_, _, state| assert_eq!(state, o));
}

#[test]
fn test_fill_sets_every_cell() {
    let mut grid = Grid::new(3, 3);
    grid.fill(State::Gray);
    grid.walk(|_, _, state| assert_eq!(state, State::Gray));
}

#[test]
fn test_combine_overlays_filled_cells_at_offset() {
    let board = Grid::new(4, 4);
    let o = State::Empty;
    let overlay = Grid::from_rows(&[&[x(), o], &[x(), x()]]);

    let combined = board.combine(&overlay, Location::new(2, 1));
    assert_eq!(combined.get(Location::new(2, 1)), Some(x()));
    assert_eq!(combined.get(Location::new(2, 2)), Some(x()));
    assert_eq!(combined.get(Location::new(3, 2)), Some(x()));
    // Empty overlay cell leaves the receiver untouched.
    assert_eq!(combined.get(Location::new(3, 1)), Some(o));
    // Receiver is unchanged.
    assert_eq!(board.get(Location::new(2, 1)), Some(o));
}

#[test]
fn test_combine_drops_out_of_bounds_cells() {
    let board = Grid::new(2, 2);
    let overlay = Grid::from_rows(&[&[x(), x(), x()]]);

    let combined = board.combine(&overlay, Location::new(1, 1));
    assert_eq!(combined.get(Location::new(1, 1)), Some(x()));
    // The two cells past the right edge are silently dropped.
    assert_eq!(combined.size(), (2, 2));
}

#[test]
fn test_combine_empty_does_not_overwrite() {
    let mut board = Grid::new(2, 2);
    board.set(Location::new(0, 0), State::Red);
    let overlay = Grid::from_rows(&[&[State::Empty]]);

    let combined = board.combine(&overlay, Location::new(0, 0));
    assert_eq!(combined.get(Location::new(0, 0)), Some(State::Red));
}

#[test]
fn test_union_grows_to_bounding_box() {
    let a = Grid::from_rows(&[&[x(), x()]]);
    let b = Grid::from_rows(&[&[State::Red], &[State::Red]]);

    let merged = a.union(&b, Location::new(3, 1));
    assert_eq!(merged.size(), (3, 4));
    assert_eq!(merged.get(Location::new(0, 0)), Some(x()));
    assert_eq!(merged.get(Location::new(3, 1)), Some(State::Red));
    assert_eq!(merged.get(Location::new(3, 2)), Some(State::Red));
}

#[test]
fn test_union_other_wins_overlaps() {
    let a = Grid::from_rows(&[&[x()]]);
    let b = Grid::from_rows(&[&[State::Red]]);
    let merged = a.union(&b, Location::new(0, 0));
    assert_eq!(merged.get(Location::new(0, 0)), Some(State::Red));
}

#[test]
fn test_union_with_empty_grid_clones_the_other() {
    let a = Grid::new(0, 0);
    let b = Grid::from_rows(&[&[x()]]);
    assert_eq!(a.union(&b, Location::new(5, 5)), b);
    assert_eq!(b.union(&a, Location::new(5, 5)), b);
}

#[test]
fn test_rotate_right_formula() {
    let o = State::Empty;
    // 2x3 input.
    let grid = Grid::from_rows(&[&[x(), o, o], &[x(), x(), o]]);
    let turned = grid.rotate_right();

    // Output is 3x2: out[col][rows-1-row] = in[row][col].
    assert_eq!(turned.size(), (3, 2));
    assert_eq!(turned.get(Location::new(1, 0)), Some(x())); // in (0,0)
    assert_eq!(turned.get(Location::new(0, 0)), Some(x())); // in (1,0)
    assert_eq!(turned.get(Location::new(0, 1)), Some(x())); // in (1,1)
    assert_eq!(turned.get(Location::new(1, 1)), Some(o));
}

#[test]
fn test_rotate_left_formula() {
    let o = State::Empty;
    let grid = Grid::from_rows(&[&[x(), o, o], &[x(), x(), o]]);
    let turned = grid.rotate_left();

    // Output is 3x2: out[cols-1-col][row] = in[row][col].
    assert_eq!(turned.size(), (3, 2));
    assert_eq!(turned.get(Location::new(0, 2)), Some(x())); // in (0,0)
    assert_eq!(turned.get(Location::new(1, 2)), Some(x())); // in (1,0)
    assert_eq!(turned.get(Location::new(1, 1)), Some(x())); // in (1,1)
    assert_eq!(turned.get(Location::new(0, 0)), Some(o));
}

#[test]
fn test_rotation_round_trip_on_square_grid() {
    let o = State::Empty;
    let grid = Grid::from_rows(&[
        &[x(), o, o],
        &[x(), x(), o],
        &[o, x(), State::Red],
    ]);

    let mut right = grid.clone();
    for _ in 0..4 {
        right = right.rotate_right();
    }
    assert_eq!(right, grid);

    let mut left = grid.clone();
    for _ in 0..4 {
        left = left.rotate_left();
    }
    assert_eq!(left, grid);
}

#[test]
fn test_rotate_right_then_left_is_identity() {
    let o = State::Empty;
    let grid = Grid::from_rows(&[&[x(), o], &[x(), x()], &[o, x()]]);
    assert_eq!(grid.rotate_right().rotate_left(), grid);
}
