//! Renderer - paints the board and the active piece onto a [`Surface`]
//!
//! Drawing is incremental. A move undraws the piece's old tiles in white and
//! draws the new ones in the piece color; nothing else is touched. The whole
//! board is repainted only after a lock, at game start, and after a restart.
//! The surface is expected to keep its pixels between calls, as a canvas does.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::session::{GameSession, Outcome};
use crate::types::{Color, COLUMNS, ROWS};

/// A raster the renderer can paint rectangles on.
///
/// Coordinates are in surface pixels.
pub trait Surface {
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32);
    fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32);
}

/// Board/piece painter with a fixed tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    tile_size: u32,
}

impl Renderer {
    pub fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    /// Surface size needed to show the whole board.
    pub fn surface_size(&self) -> (u32, u32) {
        (COLUMNS as u32 * self.tile_size, ROWS as u32 * self.tile_size)
    }

    /// One tile: filled with the current fill color, outlined with the current
    /// stroke color.
    fn draw_tile<S: Surface + ?Sized>(&self, surface: &mut S, x: i8, y: i8) {
        if x < 0 || y < 0 {
            return;
        }
        let px = x as u32 * self.tile_size;
        let py = y as u32 * self.tile_size;
        surface.fill_rect(px, py, self.tile_size, self.tile_size);
        surface.stroke_rect(px, py, self.tile_size, self.tile_size);
    }

    pub fn draw_board<S: Surface + ?Sized>(&self, surface: &mut S, board: &Board) {
        surface.set_stroke(Color::GRID);
        for (y, row) in board.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                surface.set_fill(cell.unwrap_or(Color::WHITE));
                self.draw_tile(surface, x as i8, y as i8);
            }
        }
    }

    fn paint_piece<S: Surface + ?Sized>(&self, surface: &mut S, piece: &ActivePiece, color: Color) {
        surface.set_fill(color);
        surface.set_stroke(Color::GRID);
        for (x, y) in piece.cells() {
            self.draw_tile(surface, x, y);
        }
    }

    pub fn draw_piece<S: Surface + ?Sized>(&self, surface: &mut S, piece: &ActivePiece) {
        self.paint_piece(surface, piece, piece.color());
    }

    /// Paint the piece's tiles back to empty.
    pub fn undraw_piece<S: Surface + ?Sized>(&self, surface: &mut S, piece: &ActivePiece) {
        self.paint_piece(surface, piece, Color::WHITE);
    }

    /// Full repaint: board, then the active piece on top.
    pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S, session: &GameSession) {
        self.draw_board(surface, session.board());
        if let Some(piece) = session.active() {
            self.draw_piece(surface, &piece);
        }
    }

    /// Bring the surface up to date after a session call returned `outcome`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S, session: &GameSession, outcome: &Outcome) {
        match outcome {
            Outcome::Moved { from, to } => {
                self.undraw_piece(surface, from);
                self.draw_piece(surface, to);
            }
            Outcome::Locked { from, .. } => {
                self.undraw_piece(surface, from);
                self.draw_all(surface, session);
            }
            Outcome::Restarted => self.draw_all(surface, session),
            Outcome::Ignored | Outcome::Rejected | Outcome::Paused | Outcome::Resumed => {}
        }
    }
}
