//! Pieces module - the static piece catalog
//!
//! Every piece kind owns an ordered list of rotation frames and a fill color.
//! A frame is a square occupancy matrix read row by row; a non-zero entry marks
//! a block at `(column, row)` relative to the piece origin. Rotation simply
//! advances to the next frame, wrapping around.

use crate::rng::SimpleRng;
use crate::types::{Color, PieceKind};

/// One rotation orientation: a square occupancy matrix.
pub type Frame = &'static [&'static [u8]];

/// Static definition of a piece kind.
#[derive(Debug)]
pub struct Shape {
    pub kind: PieceKind,
    pub color: Color,
    pub frames: &'static [Frame],
}

impl Shape {
    pub fn frame(&self, rotation: usize) -> Frame {
        self.frames[rotation % self.frames.len()]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

const I_FRAMES: [Frame; 2] = [
    &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
    &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0], &[0, 0, 1, 0]],
];

const O_FRAMES: [Frame; 1] = [&[&[1, 1], &[1, 1]]];

const T_FRAMES: [Frame; 4] = [
    &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]],
];

const S_FRAMES: [Frame; 2] = [
    &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 1], &[0, 0, 1]],
];

const Z_FRAMES: [Frame; 2] = [
    &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
    &[&[0, 0, 1], &[0, 1, 1], &[0, 1, 0]],
];

const J_FRAMES: [Frame; 4] = [
    &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]],
    &[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]],
    &[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]],
];

const L_FRAMES: [Frame; 4] = [
    &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
    &[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]],
    &[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]],
    &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]],
];

/// The catalog, indexed by [`PieceKind::index`].
pub static CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        color: Color::from_hex(0x00bcd4),
        frames: &I_FRAMES,
    },
    Shape {
        kind: PieceKind::O,
        color: Color::from_hex(0xffc107),
        frames: &O_FRAMES,
    },
    Shape {
        kind: PieceKind::T,
        color: Color::from_hex(0x9c27b0),
        frames: &T_FRAMES,
    },
    Shape {
        kind: PieceKind::S,
        color: Color::from_hex(0x4caf50),
        frames: &S_FRAMES,
    },
    Shape {
        kind: PieceKind::Z,
        color: Color::from_hex(0xf44336),
        frames: &Z_FRAMES,
    },
    Shape {
        kind: PieceKind::J,
        color: Color::from_hex(0x2196f3),
        frames: &J_FRAMES,
    },
    Shape {
        kind: PieceKind::L,
        color: Color::from_hex(0xff9800),
        frames: &L_FRAMES,
    },
];

/// Look up the static shape for a piece kind
pub fn shape(kind: PieceKind) -> &'static Shape {
    &CATALOG[kind.index()]
}

/// Occupied `(dx, dy)` offsets of a frame, row by row
pub fn frame_cells(frame: Frame) -> impl Iterator<Item = (i8, i8)> {
    frame.iter().enumerate().flat_map(|(dy, row)| {
        row.iter()
            .enumerate()
            .filter(|(_, v)| **v != 0)
            .map(move |(dx, _)| (dx as i8, dy as i8))
    })
}

/// Pick a catalog entry uniformly at random by index
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(CATALOG.len() as u32) as usize]
}
