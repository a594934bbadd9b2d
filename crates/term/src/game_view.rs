//! GameView: maps a render [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// Session facts shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusView {
    pub topped_out: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// How many grid rows one terminal row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowScale {
    /// One grid row per terminal row
    Full,
    /// Two grid rows per terminal row, drawn with half blocks
    Half,
}

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const FILLED: CellStyle = CellStyle::new(Rgb::new(80, 220, 220), BOARD_BG).bold();
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

const KEY_HELP: [&str; 5] = ["←/→ shift", "↑ rotate", "↓ drop", "r restart", "q quit"];

/// A lightweight terminal renderer for the game grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up typical terminal glyphs.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Full scale when the whole grid plus border fits, otherwise half.
    pub fn row_scale(frame: &Frame, viewport: Viewport) -> RowScale {
        if viewport.height as usize >= frame.height() + 2 {
            RowScale::Full
        } else {
            RowScale::Half
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        frame: &Frame,
        status: StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(CellStyle::default());

        let scale = Self::row_scale(frame, viewport);
        let rows = match scale {
            RowScale::Full => frame.height(),
            RowScale::Half => frame.height().div_ceil(2),
        } as u16;

        let board_w = frame.width() as u16 * self.cell_w;
        let frame_w = board_w + 2;
        let frame_h = rows + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_w, rows, ' ', EMPTY);
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for ty in 0..rows {
            for col in 0..frame.width() {
                let (ch, style) = match scale {
                    RowScale::Full => {
                        if frame.is_filled(col, ty as usize) {
                            ('█', FILLED)
                        } else {
                            ('·', EMPTY)
                        }
                    }
                    RowScale::Half => {
                        let top = frame.is_filled(col, 2 * ty as usize);
                        let bottom = frame.is_filled(col, 2 * ty as usize + 1);
                        match (top, bottom) {
                            (true, true) => ('█', FILLED),
                            (true, false) => ('▀', FILLED),
                            (false, true) => ('▄', FILLED),
                            (false, false) => ('·', EMPTY),
                        }
                    }
                };
                let px = start_x + 1 + col as u16 * self.cell_w;
                fb.fill_rect(px, start_y + 1 + ty, self.cell_w, 1, ch, style);
            }
        }

        self.draw_side_panel(fb, frame, viewport, start_x + frame_w + 2, start_y);

        if status.topped_out {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "TOPPED OUT");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, status: StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, status, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &frame.score.to_string(), VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", LABEL);
        for line in KEY_HELP {
            y = y.saturating_add(1);
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, VALUE.dim());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: usize, height: usize, filled: &[(usize, usize)]) -> Frame {
        let mut grid = vec![vec![false; width]; height];
        for &(c, r) in filled {
            grid[r][c] = true;
        }
        Frame { grid, score: 0 }
    }

    #[test]
    fn picks_half_scale_on_short_viewports() {
        let f = frame(4, 10, &[]);
        assert_eq!(GameView::row_scale(&f, Viewport::new(40, 12)), RowScale::Full);
        assert_eq!(GameView::row_scale(&f, Viewport::new(40, 11)), RowScale::Half);
    }

    #[test]
    fn half_scale_packs_two_rows() {
        let f = frame(2, 4, &[(0, 0), (1, 1), (0, 2), (0, 3)]);
        let view = GameView::new(1).with_anchor_y(AnchorY::Top);
        // Frame needs 6 rows at full scale; give it 4.
        let fb = view.render(&f, StatusView::default(), Viewport::new(4, 4));

        assert_eq!(fb.get(1, 1).unwrap().ch, '▀');
        assert_eq!(fb.get(2, 1).unwrap().ch, '▄');
        assert_eq!(fb.get(1, 2).unwrap().ch, '█');
        assert_eq!(fb.get(2, 2).unwrap().ch, '·');
    }
}
