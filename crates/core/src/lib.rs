//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and no I/O. A frontend feeds
//! [`GameEngine::tick`] a time delta plus the player's intents, then reads a
//! [`GameSnapshot`] back to draw.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece masks and clockwise matrix rotation
//! - [`grid`]: locked-cell map and the 10x20 grid rebuilt from it every tick
//! - [`collision`]: bounds and overlap check for a shape at an offset
//! - [`line_clear`]: full-row removal with downward shift
//! - [`piece`]: the active piece and its validated moves
//! - [`scoring`]: points, level and fall speed
//! - [`rng`]: uniform piece/color selection
//! - [`engine`]: the per-tick state machine tying it all together
//!
//! # Game Rules
//!
//! - **Randomizer**: kind and color are each picked uniformly, independently
//! - **Rotation**: clockwise only, accepted only where it fits; no wall kicks
//! - **Locking**: a piece locks on the tick gravity cannot move it down
//! - **Scoring**: 10 points per cleared row
//! - **Levels**: one level per 100 points; each level falls 0.02s faster
//! - **Game over**: any locked cell in the top row
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameEngine;
//! use blockfall_types::Intent;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.tick(0.016, &[Intent::MoveRight, Intent::Rotate]);
//! game.tick(0.3, &[]);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```

pub mod collision;
pub mod engine;
pub mod grid;
pub mod line_clear;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use collision::is_valid;
pub use engine::{GameEngine, GameSession, Phase, TickReport};
pub use grid::{Grid, LockedPositions, Occupancy};
pub use line_clear::clear_full_rows;
pub use piece::{ActivePiece, FallOutcome, NextPiece, PieceController};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{fall_speed_for_level, level_for_score, line_clear_points};
pub use shapes::Shape;
pub use snapshot::GameSnapshot;
