//! Scoring module - points, levels and fall speed
//!
//! Rules:
//! - Each cleared row is worth a flat 10 points, with no multi-row bonus.
//! - Level is `score / 100 + 1`, never below 1.
//! - Fall speed starts at 0.3s per step and shrinks by 0.02s per level, down to
//!   a floor of 0.02s.

use crate::types::{
    FALL_SPEED_STEP_SECS, INITIAL_FALL_SPEED_SECS, MIN_FALL_SPEED_SECS, SCORE_PER_LEVEL,
    SCORE_PER_ROW,
};

/// Points for clearing `rows` rows in one lock
pub fn line_clear_points(rows: usize) -> u32 {
    (rows as u32).saturating_mul(SCORE_PER_ROW)
}

/// Level reached at a given cumulative score (1-based)
pub fn level_for_score(score: u32) -> u32 {
    (score / SCORE_PER_LEVEL + 1).max(1)
}

/// Seconds per automatic drop at a given level
pub fn fall_speed_for_level(level: u32) -> f64 {
    let steps = level.saturating_sub(1) as f64;
    (INITIAL_FALL_SPEED_SECS - steps * FALL_SPEED_STEP_SECS).max(MIN_FALL_SPEED_SECS)
}
