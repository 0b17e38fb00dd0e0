//! TerminalScreen: owns the terminal while the game runs and flushes canvases to it.
//!
//! Frames are diffed against the previous one so only changed spans are written.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::canvas::{Canvas, Glyph, Rgb, Style};

pub struct TerminalScreen {
    stdout: io::Stdout,
    previous: Option<Canvas>,
    bytes: Vec<u8>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            bytes: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did
    pub fn leave(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the last frame so the next one is drawn in full
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Write `canvas` to the terminal
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.previous.as_ref(), canvas, &mut self.bytes)?;
        self.flush()?;

        match self.previous.as_mut() {
            Some(prev) => prev.clone_from(canvas),
            None => self.previous = Some(canvas.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `previous` into `next`
///
/// Without a previous frame, or when the size changed, the whole screen is
/// cleared and redrawn.
pub fn encode_frame(previous: Option<&Canvas>, next: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    let previous =
        previous.filter(|p| p.width() == next.width() && p.height() == next.height());
    if previous.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<Style> = None;
    for y in 0..next.height() {
        let row = next.row(y);
        match previous {
            Some(prev) => {
                for (start, end) in changed_spans(prev.row(y), row) {
                    queue_span(out, y, start, &row[start..end], &mut style)?;
                }
            }
            None => queue_span(out, y, 0, row, &mut style)?,
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn queue_span(
    out: &mut Vec<u8>,
    y: u16,
    x: usize,
    glyphs: &[Glyph],
    style: &mut Option<Style>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x as u16, y))?;
    for glyph in glyphs {
        if *style != Some(glyph.style) {
            queue_style(out, glyph.style)?;
            *style = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

/// Half-open index ranges where two rows differ, left to right
///
/// Only the common prefix of the two rows is compared.
fn changed_spans<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> ChangedSpans<'a, T> {
    ChangedSpans { old, new, pos: 0 }
}

struct ChangedSpans<'a, T> {
    old: &'a [T],
    new: &'a [T],
    pos: usize,
}

impl<T: PartialEq> Iterator for ChangedSpans<'_, T> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.old.len().min(self.new.len());
        let start = (self.pos..len).find(|&i| self.old[i] != self.new[i])?;
        let end = (start..len)
            .find(|&i| self.old[i] == self.new[i])
            .unwrap_or(len);
        self.pos = end;
        Some((start, end))
    }
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
