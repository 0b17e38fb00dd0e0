use crate::piece::NextPiece;
use crate::types::{Cell, PieceColor, ShapeKind, GRID_HEIGHT, GRID_WIDTH, INITIAL_FALL_SPEED_SECS};

/// Read-only view of the engine handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    /// Locked cells with the active piece painted on top
    pub grid: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub next: NextPiece,
    pub score: u32,
    pub level: u32,
    pub fall_speed: f64,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            next: NextPiece {
                kind: ShapeKind::I,
                color: PieceColor::Cyan,
            },
            score: 0,
            level: 1,
            fall_speed: INITIAL_FALL_SPEED_SECS,
            game_over: false,
        }
    }
}
