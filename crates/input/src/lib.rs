//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`] and gathers every
//! press that arrives during one frame so the engine can apply them in order.
//! Key bindings are fixed.

pub mod map;
pub mod poll;

pub use blockfall_types as types;

pub use map::intent_for_key;
pub use poll::{drain_intents, FrameIntents, MAX_INTENTS_PER_FRAME};
