//! Row clearing over the locked-cell map

use blockfall::core::{clear_full_rows, LockedPositions};
use blockfall::types::{PieceColor, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(locked: &mut LockedPositions, y: i8, color: PieceColor) {
    for x in 0..GRID_WIDTH as i8 {
        locked.insert(x, y, color);
    }
}

#[test]
fn test_two_bottom_rows_cleared_together() {
    let mut locked = LockedPositions::new();
    fill_row(&mut locked, 18, PieceColor::Cyan);
    fill_row(&mut locked, 19, PieceColor::Red);
    locked.insert(3, 17, PieceColor::Green);

    assert_eq!(clear_full_rows(&mut locked), 2);

    assert_eq!(locked.len(), 1);
    assert_eq!(locked.get(3, 19), Some(PieceColor::Green));
    for y in 0..GRID_HEIGHT as i8 - 1 {
        assert!(!locked.row_has_any(y), "row {} should be empty", y);
    }
}

#[test]
fn test_cells_above_shift_by_rows_cleared() {
    let mut locked = LockedPositions::new();
    fill_row(&mut locked, 1, PieceColor::Blue);
    fill_row(&mut locked, 2, PieceColor::Blue);
    locked.insert(7, 0, PieceColor::Purple);

    assert_eq!(clear_full_rows(&mut locked), 2);
    assert_eq!(locked.len(), 1);
    assert_eq!(locked.get(7, 2), Some(PieceColor::Purple));
}

#[test]
fn test_nothing_full_leaves_map_alone() {
    let mut locked = LockedPositions::new();
    for x in 1..GRID_WIDTH as i8 {
        locked.insert(x, 19, PieceColor::Orange);
    }
    locked.insert(0, 10, PieceColor::Yellow);
    let before = locked.clone();

    assert_eq!(clear_full_rows(&mut locked), 0);
    assert_eq!(locked, before);
}

#[test]
fn test_separated_full_rows_keep_middle_row() {
    let mut locked = LockedPositions::new();
    fill_row(&mut locked, 19, PieceColor::Red);
    locked.insert(0, 18, PieceColor::Green);
    fill_row(&mut locked, 17, PieceColor::Red);

    assert_eq!(clear_full_rows(&mut locked), 2);
    assert_eq!(locked.len(), 1);
    assert_eq!(locked.get(0, 19), Some(PieceColor::Green));
}

#[test]
fn test_four_rows_at_once() {
    let mut locked = LockedPositions::new();
    for y in 16..20 {
        fill_row(&mut locked, y, PieceColor::Cyan);
    }
    assert_eq!(clear_full_rows(&mut locked), 4);
    assert!(locked.is_empty());
}
