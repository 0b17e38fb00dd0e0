//! Per-frame event draining.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::intent_for_key;
use crate::types::Intent;

/// Presses beyond this many in one frame are dropped
pub const MAX_INTENTS_PER_FRAME: usize = 32;

/// Everything the input layer saw during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameIntents {
    intents: ArrayVec<Intent, MAX_INTENTS_PER_FRAME>,
    resized: bool,
}

impl FrameIntents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intents in arrival order
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// The terminal changed size during the frame
    pub fn resized(&self) -> bool {
        self.resized
    }

    pub fn clear(&mut self) {
        self.intents.clear();
        self.resized = false;
    }

    /// Record one terminal event
    ///
    /// Only key presses produce intents; releases and terminal auto-repeat
    /// reports are ignored.
    pub fn push_event(&mut self, ev: Event) {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = intent_for_key(key) {
                    let _ = self.intents.try_push(intent);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
    }
}

/// Wait up to `timeout` for input, then take everything already queued
///
/// `out` is cleared first so callers can reuse one buffer across frames.
pub fn drain_intents(timeout: Duration, out: &mut FrameIntents) -> Result<()> {
    out.clear();
    if !event::poll(timeout)? {
        return Ok(());
    }
    out.push_event(event::read()?);
    while event::poll(Duration::ZERO)? {
        out.push_event(event::read()?);
    }
    Ok(())
}
