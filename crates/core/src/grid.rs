//! Grid module - locked cells and the per-tick grid view
//!
//! [`LockedPositions`] is the authoritative record of settled cells. [`Grid`] is a
//! 10x20 projection of it, rebuilt from scratch every tick, with the active piece
//! painted on top for rendering.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Locked cells may sit above the top edge (y < 0); the grid simply does not show them.

use std::collections::HashMap;

use crate::types::{Cell, PieceColor, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// Anything that can answer "is this position taken?"
pub trait Occupancy {
    fn is_occupied(&self, x: i8, y: i8) -> bool;
}

/// Settled cells keyed by absolute `(x, y)`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockedPositions {
    cells: HashMap<(i8, i8), PieceColor>,
}

impl LockedPositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a locked cell, returning the previous color
    pub fn insert(&mut self, x: i8, y: i8, color: PieceColor) -> Option<PieceColor> {
        self.cells.insert((x, y), color)
    }

    pub fn get(&self, x: i8, y: i8) -> Option<PieceColor> {
        self.cells.get(&(x, y)).copied()
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.cells.contains_key(&(x, y))
    }

    pub fn remove(&mut self, x: i8, y: i8) -> Option<PieceColor> {
        self.cells.remove(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = ((i8, i8), PieceColor)> + '_ {
        self.cells.iter().map(|(&pos, &color)| (pos, color))
    }

    /// Every column of row `y` holds a locked cell
    pub fn is_row_full(&self, y: i8) -> bool {
        (0..GRID_WIDTH as i8).all(|x| self.contains(x, y))
    }

    /// At least one column of row `y` holds a locked cell
    pub fn row_has_any(&self, y: i8) -> bool {
        (0..GRID_WIDTH as i8).any(|x| self.contains(x, y))
    }
}

impl Occupancy for LockedPositions {
    fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.contains(x, y)
    }
}

/// Rendered grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// An all-empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Project the locked cells onto a fresh grid
    ///
    /// Entries outside the addressable area are skipped.
    pub fn build(locked: &LockedPositions) -> Self {
        let mut grid = Self::new();
        for ((x, y), color) in locked.iter() {
            grid.paint(x, y, color);
        }
        grid
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Cell at `(x, y)`, or None when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// One row as a slice; panics if `y` is not below the grid height
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = GRID_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(GRID_WIDTH as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a fixed 2D array (snapshot layout)
    pub fn write_rows(&self, out: &mut [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Paint one cell; out-of-range positions are ignored
    pub(crate) fn paint(&mut self, x: i8, y: i8, color: PieceColor) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = Some(color);
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Occupancy for Grid {
    fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
        assert_eq!(Grid::index(0, -1), None);
    }

    #[test]
    fn test_build_skips_cells_above_top() {
        let mut locked = LockedPositions::new();
        locked.insert(4, -1, PieceColor::Red);
        locked.insert(4, 0, PieceColor::Blue);

        let grid = Grid::build(&locked);
        assert_eq!(grid.filled_count(), 1);
        assert_eq!(grid.get(4, 0), Some(Some(PieceColor::Blue)));
    }

    #[test]
    fn test_paint_ignores_out_of_range() {
        let mut grid = Grid::new();
        grid.paint(-1, 3, PieceColor::Green);
        grid.paint(3, 20, PieceColor::Green);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_row_helpers() {
        let mut locked = LockedPositions::new();
        for x in 0..GRID_WIDTH as i8 {
            locked.insert(x, 7, PieceColor::Cyan);
        }
        locked.insert(0, 6, PieceColor::Cyan);

        assert!(locked.is_row_full(7));
        assert!(!locked.is_row_full(6));
        assert!(locked.row_has_any(6));
        assert!(!locked.row_has_any(5));
    }
}
