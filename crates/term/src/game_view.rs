//! GameView: composes the canvas and a status panel into a terminal frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::core::GameSession;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Color;

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

/// Status values shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub lines: u32,
    pub level: f64,
    pub paused: bool,
    pub game_over: bool,
}

impl From<&GameSession> for Hud {
    fn from(session: &GameSession) -> Self {
        Self {
            lines: session.lines_completed(),
            level: session.level(),
            paused: session.paused(),
            game_over: session.game_over(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, canvas: &Canvas, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (board_w, board_h) = canvas.cell_size();
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h) / 2;

        canvas.blit_into(fb, start_x, start_y);
        self.draw_side_panel(fb, hud, viewport, start_x + board_w, start_y);

        let banner = if hud.game_over {
            Some("GAME OVER")
        } else if hud.paused {
            Some("PAUSED")
        } else {
            None
        };
        if let Some(text) = banner {
            self.draw_banner(fb, start_x, start_y, board_w, board_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &Canvas, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, hud, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, hud: &Hud, viewport: Viewport, board_right: u16, top: u16) {
        let x = board_right.saturating_add(2);
        if x.saturating_add(8) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();
        let hint = CellStyle::new(Color::new(130, 130, 130), Color::BLACK);

        fb.put_str(x, top, "LINES", label);
        fb.put_str(x, top + 1, &hud.lines.to_string(), value);
        fb.put_str(x, top + 3, "LEVEL", label);
        fb.put_str(x, top + 4, &format!("{:.1}", hud.level), value);

        let keys = ["←→ move", "↑ rotate", "↓ drop", "p pause", "r restart", "q/Esc quit"];
        for (i, line) in keys.iter().enumerate() {
            fb.put_str(x, top + 6 + i as u16, line, hint);
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Color::WHITE,
            bg: Color::BLACK,
            bold: true,
        };
        let text_w = text.chars().count() as u16;
        let bx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(bx, y.saturating_add(h / 2), text, style);
    }
}
