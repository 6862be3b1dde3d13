//! Terminal host surface.
//!
//! The core renderer paints rectangles on a [`Canvas`], a persistent pixel
//! raster. [`GameView`] places that canvas and a small status panel into a
//! [`FrameBuffer`], and [`TerminalRenderer`] flushes the framebuffer to the
//! terminal, writing only the cells that changed.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
