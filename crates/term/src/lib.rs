//! Terminal frontend for the falling-block game.
//!
//! The engine never draws. This crate reads a [`core::GameSnapshot`], lays it
//! out on a [`Canvas`] and flushes the canvas to the terminal through
//! [`TerminalScreen`].
//!
//! - `canvas`: styled character grid, no I/O
//! - `game_view`: snapshot to canvas layout, no I/O
//! - `screen`: raw mode, alternate screen, diffed frame output

pub mod canvas;
pub mod game_view;
pub mod screen;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::{Canvas, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use screen::{encode_frame, TerminalScreen};
