//! Board tests - collision, locking, and the line-clear shifting rule

use blockfall::core::board::{clear_full_rows_in, Row};
use blockfall::core::Board;
use blockfall::types::{Color, COLUMNS, ROWS};

const RED: Color = Color::new(220, 40, 40);
const BLUE: Color = Color::new(40, 40, 220);
const GREEN: Color = Color::new(40, 220, 40);

fn fill_row(board: &mut Board, y: i8, color: Color) {
    for x in 0..COLUMNS as i8 {
        board.set(x, y, Some(color));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLUMNS);
    assert_eq!(board.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLUMNS as i8 {
            assert!(!board.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_is_occupied_out_of_bounds_regardless_of_contents() {
    let empty = Board::new();
    let mut full = Board::new();
    for y in 0..ROWS as i8 {
        fill_row(&mut full, y, RED);
    }

    for board in [&empty, &full] {
        for y in -2..ROWS as i8 + 3 {
            assert!(board.is_occupied(-1, y));
            assert!(board.is_occupied(-5, y));
            assert!(board.is_occupied(COLUMNS as i8, y));
        }
        for x in 0..COLUMNS as i8 {
            assert!(board.is_occupied(x, ROWS as i8));
            assert!(board.is_occupied(x, ROWS as i8 + 4));
        }
    }
}

#[test]
fn test_set_out_of_bounds_is_rejected() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(RED)));
    assert!(!board.set(0, -1, Some(RED)));
    assert!(!board.set(COLUMNS as i8, 0, Some(RED)));
    assert!(!board.set(0, ROWS as i8, Some(RED)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_lock_writes_color_into_cells() {
    let mut board = Board::new();
    let outcome = board.lock_cells([(3, 5), (4, 5), (3, 6), (4, 6)], BLUE);

    assert!(!outcome.topped_out);
    assert_eq!(outcome.lines_cleared, 0);
    for (x, y) in [(3, 5), (4, 5), (3, 6), (4, 6)] {
        assert_eq!(board.get(x, y), Some(Some(BLUE)));
    }
}

#[test]
fn test_lock_completing_bottom_row_shifts_stack_down() {
    let mut board = Board::new();
    for x in 0..COLUMNS as i8 - 2 {
        board.set(x, 19, Some(RED));
    }
    board.set(0, 18, Some(GREEN));

    let outcome = board.lock_cells([(8, 19), (9, 19), (8, 18), (9, 18)], BLUE);

    assert_eq!(outcome.lines_cleared, 1);
    // Row 18 fell into row 19.
    assert_eq!(board.get(0, 19), Some(Some(GREEN)));
    assert_eq!(board.get(8, 19), Some(Some(BLUE)));
    assert_eq!(board.get(1, 19), Some(None));
    assert!(!board.is_row_full(19));
}

#[test]
fn test_lock_above_board_is_a_top_out() {
    let mut board = Board::new();
    let outcome = board.lock_cells([(5, -2), (5, -1), (5, 0), (6, 0)], RED);
    assert!(outcome.topped_out);
    assert_eq!(board.get(5, 0), Some(Some(RED)));
    assert_eq!(board.get(6, 0), Some(Some(RED)));
}

#[test]
fn test_four_row_grid_adjacent_clears() {
    let top: Row = {
        let mut r = [None; COLUMNS as usize];
        r[4] = Some(GREEN);
        r
    };
    let buffer: Row = {
        let mut r = [None; COLUMNS as usize];
        r[7] = Some(BLUE);
        r
    };
    let mut rows = [top, buffer, [Some(RED); COLUMNS as usize], [Some(BLUE); COLUMNS as usize]];

    let cleared = clear_full_rows_in(&mut rows);

    assert_eq!(cleared, 2);
    assert!(rows.iter().all(|r| r.iter().any(|c| c.is_none())));
    assert_eq!(rows[0], top);
    assert_eq!(rows[1], buffer);
    assert_eq!(rows[2], buffer);
    assert_eq!(rows[3], buffer);
}

#[test]
fn test_separated_full_rows_each_shift_once() {
    let mut board = Board::new();
    fill_row(&mut board, 19, RED);
    board.set(2, 18, Some(GREEN));
    fill_row(&mut board, 17, BLUE);
    board.set(5, 16, Some(GREEN));

    assert_eq!(board.clear_full_rows(), 2);

    // Row 17 cleared first: 16 -> 17. Then row 19: 18 -> 19, 17 -> 18.
    assert_eq!(board.get(2, 19), Some(Some(GREEN)));
    assert_eq!(board.get(5, 18), Some(Some(GREEN)));
    assert_eq!(board.get(5, 17), Some(None));
}

#[test]
fn test_clear_resets_every_cell() {
    let mut board = Board::new();
    fill_row(&mut board, 10, RED);
    board.clear();
    assert_eq!(board, Board::new());
}
