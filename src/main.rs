//! Terminal runner (default binary).
//!
//! Drives a [`GameSession`] from a ~60 FPS refresh loop, maps key presses to
//! actions, and paints through the core renderer onto a terminal canvas.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameSession, Outcome, Renderer};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{Canvas, FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_TILE_SIZE, FRAME_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game in the terminal")]
struct Args {
    /// Seed for the piece sequence (defaults to the wall clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Tile edge in canvas pixels; one terminal cell is 1x2 pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, value_parser = clap::value_parser!(u16).range(2..=16))]
    tile_size: u16,

    /// Write logs to this file (RUST_LOG selects the level, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!(seed, tile_size = args.tile_size, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, args.tile_size);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logging goes to a file only: the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, tile_size: u16) -> Result<()> {
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    let mut session = GameSession::new(seed);
    let renderer = Renderer::new(tile_size as u32);
    let (canvas_w, canvas_h) = renderer.surface_size();
    let mut canvas = Canvas::new(canvas_w, canvas_h);
    renderer.draw_all(&mut canvas, &session);

    let view = GameView;
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(FRAME_MS);
    let mut next_frame = Instant::now();

    loop {
        let outcome = session.tick(now_ms());
        present(&renderer, &mut canvas, &session, &outcome);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&canvas, &Hud::from(&session), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next refresh.
        next_frame += frame;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!(lines = session.lines_completed(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let outcome = session.apply_action(action, now_ms());
                        present(&renderer, &mut canvas, &session, &outcome);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Fell behind (e.g. the process was suspended): don't try to catch up.
        let now = Instant::now();
        if next_frame < now {
            next_frame = now;
        }
    }
}

/// Repaint what `outcome` changed and surface a game over.
fn present(renderer: &Renderer, canvas: &mut Canvas, session: &GameSession, outcome: &Outcome) {
    renderer.apply(canvas, session, outcome);
    if outcome.is_game_over() {
        info!(lines = session.lines_completed(), "game over, press r to restart");
    }
}
