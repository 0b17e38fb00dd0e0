//! Line clearing over the sparse locked-cell map.

use crate::grid::LockedPositions;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Remove every full row and drop the rows above it
///
/// Rows are scanned from the floor upward. When row `y` is full its cells are
/// deleted and every row above shifts down by one; row `y` is then examined
/// again, since it now holds what used to sit above it. Returns the number of
/// rows removed.
pub fn clear_full_rows(locked: &mut LockedPositions) -> usize {
    let mut cleared = 0;
    let mut y = GRID_HEIGHT as i8 - 1;

    while y >= 0 {
        if !locked.is_row_full(y) {
            y -= 1;
            continue;
        }

        cleared += 1;
        for x in 0..GRID_WIDTH as i8 {
            locked.remove(x, y);
        }
        shift_down_into(locked, y);
    }

    cleared
}

/// Move rows `0..row` down by one, filling `row` from the row above it
fn shift_down_into(locked: &mut LockedPositions, row: i8) {
    for r in (1..=row).rev() {
        for x in 0..GRID_WIDTH as i8 {
            if let Some(color) = locked.remove(x, r - 1) {
                locked.insert(x, r, color);
            }
        }
    }
}
