//! Shapes module - the static piece catalog and matrix rotation
//!
//! A shape is a small boolean matrix (at most 4x4) with explicit dimensions.
//! Rotation builds a fresh matrix; nothing here keeps a rotation table.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest side of any shape matrix
pub const MAX_SHAPE_DIM: usize = 4;

/// Filled cells of a shape as `(x, y)` offsets from its top-left corner
pub type ShapeCells = ArrayVec<(i8, i8), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Boolean cell mask with explicit width and height
///
/// Only the `width x height` top-left region of `mask` is meaningful; cells
/// outside it are always `false`, so derived equality compares shapes cell for
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    mask: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// Panics if the rows are empty, ragged, larger than 4x4 or all zero.
    /// Only used with the static catalog and in tests.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM);

        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {}", y);
            for (x, &v) in row.iter().enumerate() {
                mask[y][x] = v != 0;
            }
        }

        let shape = Self {
            mask,
            width: width as u8,
            height: rows.len() as u8,
        };
        assert!(shape.filled_count() > 0, "shape has no filled cell");
        shape
    }

    /// Canonical (spawn) shape for a kind
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::T => Self::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            ShapeKind::Z => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            ShapeKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(x, y)` is filled; false outside the matrix
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.mask[y][x]
    }

    /// Rotate 90° clockwise: transpose, then reverse each row
    ///
    /// The result is `h x w` for a `w x h` input and
    /// `out[r][c] == in[h - 1 - c][r]`.
    pub fn rotated(&self) -> Shape {
        let w = self.width as usize;
        let h = self.height as usize;

        let mut mask = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in mask.iter_mut().enumerate().take(w) {
            for (c, out) in out_row.iter_mut().enumerate().take(h) {
                *out = self.mask[h - 1 - c][r];
            }
        }

        Shape {
            mask,
            width: self.height,
            height: self.width,
        }
    }

    /// Filled cells in row-major order
    pub fn filled_cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.mask[y][x] {
                    cells.push((x as i8, y as i8));
                }
            }
        }
        cells
    }

    pub fn filled_count(&self) -> usize {
        self.mask
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v)
            .count()
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Shape::of(kind)
    }
}
