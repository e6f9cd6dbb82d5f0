//! Terminal memory puzzle runner (default binary).
//!
//! Single-threaded frame loop: render, poll input until the next tick, apply
//! at most one selection, then advance the game clock. Logging goes to stderr
//! and is off unless `RUST_LOG` is set; redirect it (`2>puzzle.log`) since
//! the game owns the screen.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::{info, warn};

use memory_puzzle::config::Args;
use memory_puzzle::core::{GameState, Layout, TileGeometry};
use memory_puzzle::frame::apply_frame;
use memory_puzzle::input::{map_event, InputState};
use memory_puzzle::term::{FrameBuffer, GameView, TerminalRenderer, Viewport, HUD_ROWS};
use memory_puzzle::types::{CellPos, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = args.board_config().context("invalid board size")?;
    let geometry = args.geometry().context("invalid tile geometry")?;
    let seed = args.seed_or_random();
    info!(
        "starting {}x{} board, seed {}, intro {}",
        config.width(),
        config.height(),
        seed,
        !args.no_intro
    );

    let mut game = GameState::new(config, seed).with_intro(!args.no_intro);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, geometry);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, geometry: TileGeometry) -> Result<()> {
    game.start();

    let view = GameView::default();
    let mut input = InputState::new(game.config().width(), game.config().height());
    let mut fb = FrameBuffer::new(0, 0);
    let mut hover: Option<CellPos> = None;
    let mut warned_size: Option<(u16, u16)> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Layout follows the terminal size every frame.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let board_h = h.saturating_sub(HUD_ROWS);
        let layout = Layout::centered(game.config(), geometry, w, board_h);
        if !layout.fits(w, board_h) && warned_size != Some((w, h)) {
            let (need_w, need_h) = layout.grid_size();
            warn!(
                "terminal {}x{} is too small for the board ({}x{} plus {} status rows)",
                w, h, need_w, need_h, HUD_ROWS
            );
            warned_size = Some((w, h));
        }

        // Render.
        view.render_into(game, &layout, hover, Viewport::new(w, h), &mut fb);
        term.draw(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            loop {
                let ev = event::read()?;
                if let Event::Resize(..) = ev {
                    term.invalidate();
                }
                if let Some(ev) = map_event(&ev) {
                    input.push(ev);
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let frame = input.take_frame();
        if frame.quit {
            return Ok(());
        }
        hover = apply_frame(game, &frame, &layout);

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
