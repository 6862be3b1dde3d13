//! Active piece - the falling piece and its movement rules
//!
//! Moves are tested against the board before they are committed, so a piece
//! that exists is always in a legal position. Rejected moves leave the piece
//! untouched.

use crate::board::Board;
use crate::pieces::{frame_cells, shape, Frame, Shape};
use crate::types::{Color, PieceKind, COLUMNS, SPAWN_X, SPAWN_Y};

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Index into the shape's frame list
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` at the spawn origin, first frame
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        shape(self.kind)
    }

    pub fn frame(&self) -> Frame {
        self.shape().frame(self.rotation)
    }

    pub fn color(&self) -> Color {
        self.shape().color
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (x, y) = (self.x, self.y);
        frame_cells(self.frame()).map(move |(dx, dy)| (x + dx, y + dy))
    }

    /// Would `frame` overlap something if the origin moved by (dx, dy)?
    ///
    /// Cells still above the board are skipped entirely.
    pub fn collides(&self, board: &Board, dx: i8, dy: i8, frame: Frame) -> bool {
        frame_cells(frame).any(|(cx, cy)| {
            let x = self.x + cx + dx;
            let y = self.y + cy + dy;
            y >= 0 && board.is_occupied(x, y)
        })
    }

    /// Move by (dx, dy) if the destination is free
    ///
    /// Returns true if the piece moved.
    pub fn try_shift(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        if self.collides(board, dx, dy, self.frame()) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Advance to the next frame, nudging one column inward if needed
    ///
    /// When the next frame collides in place, a single nudge is tried: one
    /// column left when the origin is right of the board's midpoint, otherwise
    /// one column right. If that also collides nothing changes.
    ///
    /// Returns true if the piece rotated.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let shape = self.shape();
        let next = (self.rotation + 1) % shape.frame_count();
        let next_frame = shape.frame(next);

        let mut nudge = 0;
        if self.collides(board, 0, 0, next_frame) {
            nudge = if self.x > (COLUMNS / 2) as i8 { -1 } else { 1 };
        }

        if nudge != 0 && self.collides(board, nudge, 0, next_frame) {
            return false;
        }

        self.x += nudge;
        self.rotation = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ROWS;

    fn at(kind: PieceKind, rotation: usize, x: i8, y: i8) -> ActivePiece {
        ActivePiece { kind, rotation, x, y }
    }

    #[test]
    fn spawns_above_board() {
        let piece = ActivePiece::new(PieceKind::T);
        assert_eq!((piece.x, piece.y, piece.rotation), (SPAWN_X, SPAWN_Y, 0));
        assert!(piece.cells().all(|(_, y)| y < 0));
    }

    #[test]
    fn cells_above_board_never_collide() {
        let board = Board::new();
        // Horizontal I bar sticking past the right wall, but still above row 0.
        let piece = at(PieceKind::I, 0, 8, -3);
        assert!(!piece.collides(&board, 0, 0, piece.frame()));
    }

    #[test]
    fn shift_stops_at_walls() {
        let board = Board::new();
        let mut piece = at(PieceKind::O, 0, 0, 5);
        assert!(!piece.try_shift(&board, -1, 0));
        assert_eq!(piece.x, 0);

        let mut piece = at(PieceKind::O, 0, COLUMNS as i8 - 2, 5);
        assert!(!piece.try_shift(&board, 1, 0));
        assert!(piece.try_shift(&board, -1, 0));
        assert_eq!(piece.x, COLUMNS as i8 - 3);
    }

    #[test]
    fn shift_stops_at_floor() {
        let board = Board::new();
        let mut piece = at(PieceKind::O, 0, 4, ROWS as i8 - 2);
        assert!(piece.collides(&board, 0, 1, piece.frame()));
        assert!(!piece.try_shift(&board, 0, 1));
    }

    #[test]
    fn rotation_in_open_space_has_no_nudge() {
        let board = Board::new();
        let mut piece = at(PieceKind::T, 0, 4, 5);
        assert!(piece.try_rotate(&board));
        assert_eq!((piece.x, piece.rotation), (4, 1));
    }

    #[test]
    fn rotation_wraps_frame_index() {
        let board = Board::new();
        let mut piece = at(PieceKind::S, 1, 4, 5);
        assert!(piece.try_rotate(&board));
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn rotation_against_left_wall_nudges_right() {
        let board = Board::new();
        // Vertical T (frame 1) hugging the left wall: cells at dx 1..=2.
        let mut piece = at(PieceKind::T, 1, -1, 5);
        assert!(piece.try_rotate(&board));
        assert_eq!((piece.x, piece.rotation), (0, 2));
    }

    #[test]
    fn rotation_against_right_wall_nudges_left() {
        let board = Board::new();
        // Vertical T (frame 3) hugging the right wall: cells at dx 0..=1.
        let mut piece = at(PieceKind::T, 3, COLUMNS as i8 - 2, 5);
        assert!(piece.try_rotate(&board));
        assert_eq!((piece.x, piece.rotation), (COLUMNS as i8 - 3, 0));
    }

    #[test]
    fn rotation_without_room_is_rejected() {
        let mut board = Board::new();
        // Wall off both sides of a vertical I at column 4.
        for y in 0..ROWS as i8 {
            board.set(3, y, Some(Color::BLACK));
            board.set(5, y, Some(Color::BLACK));
        }
        let mut piece = at(PieceKind::I, 1, 2, 5);
        let before = piece;
        assert!(!piece.try_rotate(&board));
        assert_eq!(piece, before);
    }
}
