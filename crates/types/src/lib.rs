//! Shared types module - constants and plain data used by every crate
//!
//! Everything here is a pure data structure with no external dependencies, so it
//! can be used from core logic, rendering, and input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn origin**: (6, -2), two rows above the visible board
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host refresh interval (~60 FPS) |
//! | `DROP_STEP_MS` | 50 | Interval multiplier per level step |
//! | `MAX_LEVEL` | 10 | Level ceiling |
//!
//! The forced-descent interval is `DROP_STEP_MS * (11 - level)`, so 500ms at
//! level 1 and 50ms at level 10.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, COLUMNS, ROWS};
//!
//! assert_eq!(PieceKind::ALL[PieceKind::T.index()], PieceKind::T);
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells
pub const COLUMNS: u8 = 10;

/// Board height in cells
pub const ROWS: u8 = 20;

/// Spawn column of a new piece's origin
pub const SPAWN_X: i8 = 6;

/// Spawn row of a new piece's origin (above the visible board)
pub const SPAWN_Y: i8 = -2;

/// Host refresh interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Forced-descent interval multiplier: interval = `DROP_STEP_MS * (11 - level)`
pub const DROP_STEP_MS: f64 = 50.0;

/// Starting level
pub const START_LEVEL: f64 = 1.0;

/// Level ceiling
pub const MAX_LEVEL: f64 = 10.0;

/// Lines after which the level is pinned at `MAX_LEVEL`
pub const MAX_LEVEL_LINES: u32 = 91;

/// Lines per full level step
pub const LINES_PER_LEVEL: f64 = 10.0;

/// Default tile edge in surface pixels
pub const DEFAULT_TILE_SIZE: u16 = 3;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Tile outline color (`#555`).
    pub const GRID: Color = Color::new(0x55, 0x55, 0x55);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    ///
    /// ```
    /// use blockfall_types::Color;
    ///
    /// assert_eq!(Color::from_hex(0x555555), Color::GRID);
    /// ```
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// The seven tetromino piece kinds
///
/// Declaration order is the catalog index used by the random picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Lowercase name, used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Player commands applied to a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot descend
    SoftDrop,
    /// Soft drop repeatedly until the piece locks
    HardDrop,
    /// Advance to the next rotation frame
    Rotate,
    /// Toggle pause
    Pause,
    /// Throw the current game away and start a fresh one
    Restart,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Color)`: settled block of that color
pub type Cell = Option<Color>;
