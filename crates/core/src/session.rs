//! Game session - owns the whole state of one game
//!
//! A [`GameSession`] ties together the board, the active piece, the piece RNG,
//! and the timing fields. The host drives it with two entry points:
//!
//! - [`GameSession::tick`] once per display refresh, with a monotonic clock in
//!   milliseconds
//! - [`GameSession::apply_action`] for each discrete input event
//!
//! Both return an [`Outcome`] describing what changed so the host can repaint
//! without inspecting internals.
//!
//! # Timing
//!
//! Each tick subtracts the elapsed time from a countdown. When the countdown
//! reaches zero it is reset to the level's drop interval and the piece descends
//! one row. At most one descent happens per tick, however long the gap between
//! ticks was.

use tracing::{debug, info};

use crate::board::Board;
use crate::level::{drop_interval_ms, level_for_lines};
use crate::piece::ActivePiece;
use crate::pieces::random_kind;
use crate::rng::SimpleRng;
use crate::types::GameAction;

/// What a session call changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing to do: no active piece, game over, paused, or countdown pending
    Ignored,
    /// Move or rotation blocked by a wall or settled blocks
    Rejected,
    /// The active piece changed position or frame
    Moved { from: ActivePiece, to: ActivePiece },
    /// The piece locked into the board. `from` is where it was before the
    /// call started (the top of a hard drop).
    Locked {
        from: ActivePiece,
        lines_cleared: u32,
        game_over: bool,
    },
    Paused,
    Resumed,
    /// The session was replaced by a fresh game
    Restarted,
}

impl Outcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::Locked { game_over: true, .. })
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    lines_completed: u32,
    game_over: bool,
    paused: bool,
    /// Milliseconds until the next forced descent
    countdown: f64,
    /// Clock value of the previous tick; `None` until the first tick
    prev_loop: Option<u64>,
}

impl GameSession {
    /// Create a new game with the given RNG seed
    ///
    /// No piece exists until the first [`tick`](Self::tick).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            lines_completed: 0,
            game_over: false,
            paused: false,
            countdown: 0.0,
            prev_loop: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn lines_completed(&self) -> u32 {
        self.lines_completed
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn countdown_ms(&self) -> f64 {
        self.countdown
    }

    pub fn started(&self) -> bool {
        self.prev_loop.is_some()
    }

    /// Current level, derived from the line count
    pub fn level(&self) -> f64 {
        level_for_lines(self.lines_completed)
    }

    /// Current forced-descent interval
    pub fn drop_interval_ms(&self) -> f64 {
        drop_interval_ms(self.level())
    }

    /// Whether the tick loop still runs
    pub fn running(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Advance the clock to `now_ms`
    ///
    /// The first call spawns the first piece. Paused and finished games ignore
    /// ticks entirely.
    pub fn tick(&mut self, now_ms: u64) -> Outcome {
        if !self.running() {
            return Outcome::Ignored;
        }

        let prev = match self.prev_loop {
            Some(prev) => prev,
            None => {
                self.spawn();
                now_ms
            }
        };

        let delta = now_ms.saturating_sub(prev);
        self.prev_loop = Some(now_ms);
        self.countdown -= delta as f64;

        if self.countdown <= 0.0 {
            self.countdown = self.drop_interval_ms();
            return self.soft_drop();
        }

        Outcome::Ignored
    }

    /// Dispatch one input action
    ///
    /// `now_ms` is only consulted when resuming from pause.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> Outcome {
        match action {
            GameAction::Pause => self.toggle_pause(now_ms),
            GameAction::Restart => self.restart(),
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }

    pub fn move_left(&mut self) -> Outcome {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> Outcome {
        self.shift(1)
    }

    fn shift(&mut self, dx: i8) -> Outcome {
        let Some(mut piece) = self.controllable() else {
            return Outcome::Ignored;
        };
        let from = piece;
        if !piece.try_shift(&self.board, dx, 0) {
            return Outcome::Rejected;
        }
        self.active = Some(piece);
        Outcome::Moved { from, to: piece }
    }

    pub fn rotate(&mut self) -> Outcome {
        let Some(mut piece) = self.controllable() else {
            return Outcome::Ignored;
        };
        let from = piece;
        if !piece.try_rotate(&self.board) {
            return Outcome::Rejected;
        }
        self.active = Some(piece);
        Outcome::Moved { from, to: piece }
    }

    /// Move down one row, or lock and spawn the next piece if blocked
    pub fn soft_drop(&mut self) -> Outcome {
        let Some(mut piece) = self.controllable() else {
            return Outcome::Ignored;
        };
        let from = piece;
        if piece.try_shift(&self.board, 0, 1) {
            self.active = Some(piece);
            return Outcome::Moved { from, to: piece };
        }
        self.lock(from, piece)
    }

    /// Soft drop until the piece locks
    pub fn hard_drop(&mut self) -> Outcome {
        let Some(mut piece) = self.controllable() else {
            return Outcome::Ignored;
        };
        let from = piece;
        while piece.try_shift(&self.board, 0, 1) {}
        self.lock(from, piece)
    }

    /// Pause or resume
    ///
    /// Resuming restarts the elapsed-time measurement at `now_ms`, so the time
    /// spent paused does not count against the countdown.
    pub fn toggle_pause(&mut self, now_ms: u64) -> Outcome {
        if self.game_over {
            return Outcome::Ignored;
        }
        self.paused = !self.paused;
        if self.paused {
            info!(lines = self.lines_completed, "paused");
            return Outcome::Paused;
        }
        if self.prev_loop.is_some() {
            self.prev_loop = Some(now_ms);
        }
        info!("resumed");
        Outcome::Resumed
    }

    /// Replace this game with a fresh one
    ///
    /// The new game continues the current random sequence rather than
    /// replaying the same pieces.
    pub fn restart(&mut self) -> Outcome {
        info!(lines = self.lines_completed, "restarting");
        *self = Self::new(self.rng.state());
        Outcome::Restarted
    }

    /// The active piece, if input may move it
    fn controllable(&self) -> Option<ActivePiece> {
        if !self.running() {
            return None;
        }
        self.active
    }

    fn spawn(&mut self) {
        let kind = random_kind(&mut self.rng);
        debug!(kind = kind.as_str(), "spawned piece");
        self.active = Some(ActivePiece::new(kind));
    }

    fn lock(&mut self, from: ActivePiece, piece: ActivePiece) -> Outcome {
        let outcome = self.board.lock_cells(piece.cells(), piece.color());
        self.lines_completed += outcome.lines_cleared;
        debug!(
            kind = piece.kind.as_str(),
            x = piece.x,
            y = piece.y,
            lines_cleared = outcome.lines_cleared,
            "locked piece"
        );

        if outcome.topped_out {
            self.game_over = true;
            self.active = None;
            info!(lines = self.lines_completed, "game over");
        } else {
            self.spawn();
        }

        Outcome::Locked {
            from,
            lines_cleared: outcome.lines_cleared,
            game_over: outcome.topped_out,
        }
    }

    /// Mutable board access for tests and tools
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece (tests and tools)
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }
}
