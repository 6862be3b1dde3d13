//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the gameplay rules and the state-update loop. It has no
//! dependencies on terminals, windows, or I/O: the host supplies a clock, input
//! actions, and a [`Surface`] to paint on.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid with collision checks, locking, and line clearing
//! - [`pieces`]: static catalog of rotation frames and colors
//! - [`piece`]: the active falling piece and its movement rules
//! - [`level`]: level curve and descent interval
//! - [`rng`]: seedable piece randomness
//! - [`session`]: one game's complete state and the tick loop
//! - [`render`]: paint-over renderer against any [`Surface`]
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameSession, Outcome};
//! use blockfall_core::types::GameAction;
//!
//! let mut session = GameSession::new(12345);
//! session.tick(0); // spawns the first piece
//!
//! session.apply_action(GameAction::MoveLeft, 0);
//! session.apply_action(GameAction::Rotate, 0);
//! let outcome = session.apply_action(GameAction::HardDrop, 0);
//!
//! assert!(matches!(outcome, Outcome::Locked { .. }));
//! ```

pub mod board;
pub mod level;
pub mod piece;
pub mod pieces;
pub mod render;
pub mod rng;
pub mod session;

pub use blockfall_types as types;

pub use board::{Board, LockOutcome};
pub use level::{drop_interval_ms, level_for_lines};
pub use piece::ActivePiece;
pub use pieces::{frame_cells, shape, Frame, Shape, CATALOG};
pub use render::{Renderer, Surface};
pub use rng::SimpleRng;
pub use session::{GameSession, Outcome};
