//! GameView: maps a `core::GameSnapshot` onto a character canvas.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, Glyph, Rgb, Style};
use crate::core::GameSnapshot;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

const BLOCK: char = '█';
const EMPTY_DOT: char = '·';

const BOARD_BG: Rgb = Rgb::new(20, 20, 20);
const GRID_LINE: Rgb = Rgb::new(100, 100, 100);
const PANEL_BG: Rgb = Rgb::new(50, 50, 50);
const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the playfield, the side panel and the game-over banner.
pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
}

/// Width of the side panel in columns, gap included.
const PANEL_W: u16 = 14;

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Columns and rows taken by the bordered board.
    pub fn board_size(&self) -> (u16, u16) {
        (GRID_WIDTH as u16 * self.cell_w + 2, GRID_HEIGHT as u16 + 2)
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.board_size();
        let total_w = w + PANEL_W;
        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        (x, viewport.height.saturating_sub(h) / 2)
    }

    /// Render into an existing canvas, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, canvas: &mut Canvas) {
        canvas.resize(viewport.width, viewport.height);
        canvas.fill(Glyph::default());

        let (ox, oy) = self.board_origin(viewport);
        let (w, h) = self.board_size();

        self.draw_frame(canvas, ox, oy, w, h);
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                self.draw_cell(canvas, ox + 1, oy + 1, x as u16, y as u16, *cell);
            }
        }

        let panel_x = ox + w + 2;
        if panel_x.saturating_add(PANEL_W - 2) <= viewport.width {
            self.draw_panel(canvas, snap, panel_x, oy);
        }

        if snap.game_over {
            self.draw_game_over(canvas, ox, oy, w, h);
        }
    }

    /// Convenience helper that allocates a new canvas.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn draw_frame(&self, canvas: &mut Canvas, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::new(GRID_LINE, Rgb::default());
        canvas.put(x, y, '┌', style);
        canvas.put(x + w - 1, y, '┐', style);
        canvas.put(x, y + h - 1, '└', style);
        canvas.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            canvas.put(x + dx, y, '─', style);
            canvas.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            canvas.put(x, y + dy, '│', style);
            canvas.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_cell(&self, canvas: &mut Canvas, ox: u16, oy: u16, x: u16, y: u16, cell: Cell) {
        let px = ox + x * self.cell_w;
        let py = oy + y;
        match cell {
            Some(color) => {
                let style = Style::new(color.into(), BOARD_BG);
                canvas.rect(px, py, self.cell_w, 1, BLOCK, style);
            }
            None => {
                let style = Style::new(GRID_LINE, BOARD_BG);
                canvas.rect(px, py, self.cell_w, 1, ' ', style);
                canvas.put(px, py, EMPTY_DOT, style);
            }
        }
    }

    fn draw_panel(&self, canvas: &mut Canvas, snap: &GameSnapshot, x: u16, y: u16) {
        let label = Style::new(TEXT, PANEL_BG).bold();
        let value = Style::new(TEXT, PANEL_BG);
        canvas.rect(x, y, PANEL_W - 2, 14, ' ', value);

        canvas.text(x + 1, y + 1, "NEXT", label);
        let preview = snap.next.shape();
        let block = Style::new(snap.next.color.into(), PANEL_BG);
        for (dx, dy) in preview.filled_cells() {
            let px = x + 1 + dx as u16 * self.cell_w;
            let py = y + 3 + dy as u16;
            canvas.rect(px, py, self.cell_w, 1, BLOCK, block);
        }

        canvas.text(x + 1, y + 8, "SCORE", label);
        canvas.number(x + 1, y + 9, snap.score, value);
        canvas.text(x + 1, y + 11, "LEVEL", label);
        canvas.number(x + 1, y + 12, snap.level, value);
    }

    fn draw_game_over(&self, canvas: &mut Canvas, ox: u16, oy: u16, w: u16, h: u16) {
        let banner = Style::new(TEXT, Rgb::default()).bold();
        let hint = Style::new(TEXT, Rgb::default());
        let mid = oy + h / 2;
        centered(canvas, ox, w, mid - 1, "GAME OVER", banner);
        centered(canvas, ox, w, mid + 1, "SPACE to restart", hint);
    }
}

fn centered(canvas: &mut Canvas, x: u16, w: u16, y: u16, text: &str, style: Style) {
    let len = text.chars().count() as u16;
    canvas.text(x + w.saturating_sub(len) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    #[test]
    fn empty_cells_show_grid_dots() {
        let snap = GameSnapshot::default();
        let view = GameView::default();
        let canvas = view.render(&snap, Viewport::new(22, 22));
        assert_eq!(canvas.get(1, 1).unwrap().ch, EMPTY_DOT);
        assert_eq!(canvas.get(2, 1).unwrap().ch, ' ');
    }

    #[test]
    fn filled_cell_uses_piece_color() {
        let mut snap = GameSnapshot::default();
        snap.grid[0][0] = Some(PieceColor::Red);
        let canvas = GameView::default().render(&snap, Viewport::new(22, 22));
        let g = canvas.get(1, 1).unwrap();
        assert_eq!(g.ch, BLOCK);
        assert_eq!(g.style.fg, Rgb::new(255, 0, 0));
    }

    #[test]
    fn narrow_viewport_skips_panel() {
        let snap = GameSnapshot::default();
        let canvas = GameView::default().render(&snap, Viewport::new(22, 22));
        assert!(!canvas.to_text().contains("SCORE"));
    }
}
