//! Collision checks for a shape placed at an offset.

use crate::grid::Occupancy;
use crate::shapes::Shape;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Whether `shape` fits with its top-left corner at `offset`
///
/// Each filled cell must land inside the side walls, above the floor and on a
/// free position. Cells above the top edge (negative y) are allowed so a piece
/// can hang partly out of view while spawning or rotating near the ceiling.
pub fn is_valid<O: Occupancy + ?Sized>(shape: &Shape, occupancy: &O, offset: (i8, i8)) -> bool {
    let (off_x, off_y) = offset;
    shape.filled_cells().iter().all(|&(dx, dy)| {
        let x = off_x + dx;
        let y = off_y + dy;
        x >= 0 && x < GRID_WIDTH as i8 && y < GRID_HEIGHT as i8 && !occupancy.is_occupied(x, y)
    })
}
