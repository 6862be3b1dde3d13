//! Integration tests for paint-over rendering onto the terminal canvas
//!
//! These drive a real session and check the canvas pixels at tile centres, so
//! they cover the core renderer and the canvas `Surface` together.

use blockfall::core::{ActivePiece, GameSession, Outcome, Renderer};
use blockfall::term::Canvas;
use blockfall::types::{Color, PieceKind, ROWS};

const TILE: u32 = 3;

fn setup() -> (GameSession, Renderer, Canvas) {
    let session = GameSession::new(12345);
    let renderer = Renderer::new(TILE);
    let (w, h) = renderer.surface_size();
    let mut canvas = Canvas::new(w, h);
    renderer.draw_all(&mut canvas, &session);
    (session, renderer, canvas)
}

/// Color at the centre of tile (x, y).
fn tile(canvas: &Canvas, x: u32, y: u32) -> Color {
    canvas.pixel(x * TILE + TILE / 2, y * TILE + TILE / 2).unwrap()
}

#[test]
fn test_initial_board_is_white_with_grey_grid() {
    let (_, _, canvas) = setup();
    assert_eq!(canvas.width(), 30);
    assert_eq!(canvas.height(), 60);
    assert_eq!(tile(&canvas, 0, 0), Color::WHITE);
    assert_eq!(tile(&canvas, 9, 19), Color::WHITE);
    assert_eq!(canvas.pixel(0, 0), Some(Color::GRID));
}

#[test]
fn test_move_leaves_no_trail() {
    let (mut session, renderer, mut canvas) = setup();
    session.tick(0);
    let piece = ActivePiece {
        kind: PieceKind::O,
        rotation: 0,
        x: 2,
        y: 4,
    };
    session.set_active(Some(piece));
    renderer.draw_piece(&mut canvas, &piece);

    let outcome = session.move_right();
    renderer.apply(&mut canvas, &session, &outcome);

    assert_eq!(tile(&canvas, 2, 4), Color::WHITE);
    assert_eq!(tile(&canvas, 2, 5), Color::WHITE);
    assert_eq!(tile(&canvas, 3, 4), piece.color());
    assert_eq!(tile(&canvas, 4, 5), piece.color());
}

#[test]
fn test_lock_repaints_cleared_board() {
    let (mut session, renderer, mut canvas) = setup();
    session.tick(0);
    let bottom = ROWS as i8 - 1;
    for x in 2..10 {
        session.board_mut().set(x, bottom, Some(Color::BLACK));
    }
    // The canvas has not seen the board edit yet.
    assert_eq!(tile(&canvas, 5, bottom as u32), Color::WHITE);

    session.set_active(Some(ActivePiece {
        kind: PieceKind::O,
        rotation: 0,
        x: 0,
        y: 10,
    }));
    let outcome = session.hard_drop();
    assert!(matches!(outcome, Outcome::Locked { lines_cleared: 1, .. }));
    renderer.apply(&mut canvas, &session, &outcome);

    let o_color = blockfall::core::shape(PieceKind::O).color;
    // The O's upper half fell into the bottom row; the rest of that row is empty.
    assert_eq!(tile(&canvas, 0, bottom as u32), o_color);
    assert_eq!(tile(&canvas, 5, bottom as u32), Color::WHITE);
    assert_eq!(tile(&canvas, 0, bottom as u32 - 1), Color::WHITE);
}

#[test]
fn test_restart_wipes_canvas() {
    let (mut session, renderer, mut canvas) = setup();
    session.board_mut().set(4, 10, Some(Color::BLACK));
    renderer.draw_board(&mut canvas, session.board());
    assert_eq!(tile(&canvas, 4, 10), Color::BLACK);

    let outcome = session.restart();
    renderer.apply(&mut canvas, &session, &outcome);
    assert_eq!(tile(&canvas, 4, 10), Color::WHITE);
}
