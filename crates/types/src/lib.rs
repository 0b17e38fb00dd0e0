//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the engine, the input
//! layer and the terminal view can all agree on the same vocabulary.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: row 0; a locked cell there ends the game
//!
//! # Progression constants
//!
//! Times are in seconds, the same unit the engine's `tick` takes as its delta.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_FALL_SPEED_SECS` | 0.3 | Seconds per automatic drop at level 1 |
//! | `FALL_SPEED_STEP_SECS` | 0.02 | Speed-up per level |
//! | `MIN_FALL_SPEED_SECS` | 0.02 | Fall speed never drops below this |
//! | `SCORE_PER_ROW` | 10 | Points per cleared row |
//! | `SCORE_PER_LEVEL` | 100 | Points needed per level |
//! | `TICK_MS` | 16 | Frame pacing used by the terminal runner |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, PieceColor, ShapeKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
//! assert_eq!(PieceColor::Cyan.rgb(), (0, 255, 255));
//! assert_eq!((GRID_WIDTH, GRID_HEIGHT), (10, 20));
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Seconds per automatic drop step at level 1
pub const INITIAL_FALL_SPEED_SECS: f64 = 0.3;

/// Fall speed decrease per level gained
pub const FALL_SPEED_STEP_SECS: f64 = 0.02;

/// Lower bound for the fall speed (reached at level 15)
pub const MIN_FALL_SPEED_SECS: f64 = 0.02;

/// Points awarded per cleared row
pub const SCORE_PER_ROW: u32 = 10;

/// Score needed for each level beyond the first
pub const SCORE_PER_LEVEL: u32 = 100;

/// Frame interval of the terminal runner in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_defaults() {
        assert_eq!(GRID_WIDTH, 10);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(SCORE_PER_ROW, 10);
        assert_eq!(SCORE_PER_LEVEL, 100);
        assert!((INITIAL_FALL_SPEED_SECS - 0.3).abs() < 1e-12);
        assert!((FALL_SPEED_STEP_SECS - 0.02).abs() < 1e-12);
        assert!(MIN_FALL_SPEED_SECS > 0.0);
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in Intent::ALL {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn colors_are_distinct() {
        for (i, a) in PieceColor::ALL.iter().enumerate() {
            for b in &PieceColor::ALL[i + 1..] {
                assert_ne!(a.rgb(), b.rgb());
            }
        }
    }
}

/// The seven canonical piece shapes
///
/// Catalog order follows the shape table: I, O, T, S, Z, L, J.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl ShapeKind {
    /// All kinds in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::L,
        ShapeKind::J,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("J"), Some(ShapeKind::J));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "l" => Some(ShapeKind::L),
            "j" => Some(ShapeKind::J),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::L => "L",
            ShapeKind::J => "J",
        }
    }
}

/// Colors a piece can be painted with
///
/// Colors are drawn independently of the shape, so any kind may show up in any
/// of these. The empty cell is not a color: see [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Orange,
    Blue,
    Green,
    Red,
    Purple,
}

impl PieceColor {
    /// All colors in palette order
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Orange,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Red,
        PieceColor::Purple,
    ];

    /// 24-bit RGB triple for this color
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 255, 255),
            PieceColor::Yellow => (255, 255, 0),
            PieceColor::Orange => (255, 165, 0),
            PieceColor::Blue => (0, 0, 255),
            PieceColor::Green => (0, 255, 0),
            PieceColor::Red => (255, 0, 0),
            PieceColor::Purple => (128, 0, 128),
        }
    }
}

/// Discrete player intents fed to the engine once per tick
///
/// The input layer translates raw key presses into these; the engine applies
/// them in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Start over after game over
    Restart,
    /// Leave the game
    Quit,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::MoveLeft,
        Intent::MoveRight,
        Intent::SoftDrop,
        Intent::Rotate,
        Intent::Restart,
        Intent::Quit,
    ];

    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("softDrop"), Some(Intent::SoftDrop));
    /// assert_eq!(Intent::from_str("ROTATE"), Some(Intent::Rotate));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "rotate" => Some(Intent::Rotate),
            "restart" => Some(Intent::Restart),
            "quit" => Some(Intent::Quit),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::Rotate => "rotate",
            Intent::Restart => "restart",
            Intent::Quit => "quit",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: filled with a piece color
pub type Cell = Option<PieceColor>;
