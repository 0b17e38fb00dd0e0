//! Piece module - the active piece and the moves it can make
//!
//! Every move is tried against the locked cells first and only committed when
//! the result is valid. A rejected move leaves the piece exactly as it was.

use crate::collision::is_valid;
use crate::grid::Occupancy;
use crate::shapes::{Shape, ShapeCells};
use crate::types::{PieceColor, ShapeKind, GRID_WIDTH};

/// Piece waiting in the preview slot
///
/// The color is chosen together with the kind and does not change until the
/// piece is promoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: ShapeKind,
    pub color: PieceColor,
}

impl NextPiece {
    pub fn shape(&self) -> Shape {
        Shape::of(self.kind)
    }
}

/// Falling piece: shape, color and top-left offset on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Canonical shape, horizontally centered on the spawn row
    pub fn spawn(kind: ShapeKind, color: PieceColor) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            color,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    pub fn offset(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Absolute positions of the filled cells, including any above the top edge
    pub fn cells(&self) -> ShapeCells {
        self.shape
            .filled_cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }
}

impl From<NextPiece> for ActivePiece {
    fn from(next: NextPiece) -> Self {
        ActivePiece::spawn(next.kind, next.color)
    }
}

/// Left column that centers `shape` on the grid
pub fn spawn_x(shape: &Shape) -> i8 {
    (GRID_WIDTH / 2) as i8 - (shape.width() / 2) as i8
}

/// Result of one automatic drop step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// Piece moved down one row
    Moved,
    /// Piece could not move and is resting on something; it should lock
    Landed,
    /// Piece could not move but the attempted row was not below the spawn row
    Blocked,
}

/// Owns the active piece and applies validated moves to it
#[derive(Debug, Clone)]
pub struct PieceController {
    active: ActivePiece,
}

impl PieceController {
    pub fn new(active: ActivePiece) -> Self {
        Self { active }
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Swap in a new piece, returning the one it replaces
    pub fn replace(&mut self, piece: ActivePiece) -> ActivePiece {
        std::mem::replace(&mut self.active, piece)
    }

    /// Put the current shape back at the centered spawn offset
    pub fn recenter(&mut self) {
        self.active.x = spawn_x(&self.active.shape);
        self.active.y = 0;
    }

    fn try_shift(&mut self, dx: i8, dy: i8, occupancy: &impl Occupancy) -> bool {
        let target = (self.active.x + dx, self.active.y + dy);
        if !is_valid(&self.active.shape, occupancy, target) {
            return false;
        }
        self.active.x = target.0;
        self.active.y = target.1;
        true
    }

    pub fn move_left(&mut self, occupancy: &impl Occupancy) -> bool {
        self.try_shift(-1, 0, occupancy)
    }

    pub fn move_right(&mut self, occupancy: &impl Occupancy) -> bool {
        self.try_shift(1, 0, occupancy)
    }

    /// Player-requested step down; never locks the piece
    pub fn soft_drop(&mut self, occupancy: &impl Occupancy) -> bool {
        self.try_shift(0, 1, occupancy)
    }

    /// Rotate clockwise in place, without wall kicks
    pub fn rotate(&mut self, occupancy: &impl Occupancy) -> bool {
        let rotated = self.active.shape.rotated();
        if !is_valid(&rotated, occupancy, self.active.offset()) {
            return false;
        }
        self.active.shape = rotated;
        true
    }

    /// Gravity step
    ///
    /// A blocked step counts as a landing when the row it tried to reach is
    /// below the spawn row, which is always the case for pieces that started on
    /// or below it.
    pub fn auto_fall(&mut self, occupancy: &impl Occupancy) -> FallOutcome {
        if self.try_shift(0, 1, occupancy) {
            return FallOutcome::Moved;
        }
        if self.active.y + 1 > 0 {
            FallOutcome::Landed
        } else {
            FallOutcome::Blocked
        }
    }
}
