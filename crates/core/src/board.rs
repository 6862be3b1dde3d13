//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the color
//! of a settled block. Coordinates: (x, y) where x ranges 0..9 (left to right)
//! and y ranges 0..19 (top to bottom). Pieces may sit at negative y while they
//! are still above the visible board.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::types::{Cell, Color, COLUMNS, ROWS};

/// One board row.
pub type Row = [Cell; COLUMNS as usize];

/// Result of writing a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// Number of full rows removed by the lock.
    pub lines_cleared: u32,
    /// At least one cell of the piece was above row 0 when it locked.
    pub topped_out: bool,
}

/// The game board - 20 rows of 10 cells
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; ROWS as usize],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; COLUMNS as usize]; ROWS as usize],
        }
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < COLUMNS as i8 && y >= 0 && y < ROWS as i8
    }

    pub fn width(&self) -> u8 {
        COLUMNS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Collision test for a single cell.
    ///
    /// Walls and the floor always collide. Above the board (y < 0) is open
    /// space. Inside the board a cell collides when it holds a color.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= COLUMNS as i8 || y >= ROWS as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.rows[y as usize][x as usize].is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows.get(y).is_some_and(row_is_full)
    }

    /// Write a piece's absolute cells into the board, then clear full rows.
    ///
    /// Cells above the board are not written; they mark the lock as a top-out.
    /// The remaining cells are still written so the final board shows where the
    /// piece came to rest.
    pub fn lock_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, color: Color) -> LockOutcome {
        let mut topped_out = false;
        for (x, y) in cells {
            if y < 0 {
                topped_out = true;
                continue;
            }
            self.set(x, y, Some(color));
        }

        let lines_cleared = self.clear_full_rows() as u32;
        LockOutcome {
            lines_cleared,
            topped_out,
        }
    }

    /// Clear all full rows and return how many were cleared
    ///
    /// See [`clear_full_rows_in`] for the exact shifting rule.
    pub fn clear_full_rows(&mut self) -> usize {
        let cleared = clear_full_rows_in(&mut self.rows);
        if cleared > 0 {
            debug!(cleared, "cleared full rows");
        }
        cleared
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            *row = [None; COLUMNS as usize];
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn row_is_full(row: &Row) -> bool {
    row.iter().all(|cell| cell.is_some())
}

/// Clear full rows of an arbitrary-height grid.
///
/// Full rows are collected once, top to bottom, before anything moves. Each
/// collected row index is then handled in that order by copying every row above
/// it one step down, stopping at row 2; rows 0 and 1 are never overwritten. When
/// neighbouring rows clear together the later shift sees the result of the
/// earlier one, so this is not a compaction.
///
/// Returns the number of full rows found.
pub fn clear_full_rows_in(rows: &mut [Row]) -> usize {
    let full: ArrayVec<usize, { ROWS as usize }> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row_is_full(row))
        .map(|(y, _)| y)
        .take(ROWS as usize)
        .collect();

    for &line in &full {
        for y in (2..=line).rev() {
            rows[y] = rows[y - 1];
        }
    }

    full.len()
}
