//! Terminal miner runner (default binary).
//!
//! Sets up logging and the terminal, then runs a fixed-timestep loop:
//! render, drain input until the next tick is due, tick.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tui_miner::engine::{GameSnapshot, Session};
use tui_miner::input::{handle_mouse_event, should_quit, InputHandler};
use tui_miner::term::{FrameBuffer, GameView, SpriteSheet, TerminalCaps, TerminalRenderer, Viewport};
use tui_miner::types::{AimMode, TICK_MS};

/// Dig for diamonds and emeralds in a 16x16 world, in your terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player sprite sheet: a PNG with 3 columns x 4 rows of frames
    #[arg(long, default_value = "Miner.png")]
    sprite_sheet: PathBuf,

    /// Aim in 4 directions instead of 8
    #[arg(long, default_value_t = false)]
    four_way: bool,

    /// Terminal columns per tile
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=8))]
    cell_width: u16,

    /// Terminal rows per tile
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    cell_height: u16,

    /// Level to start at
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    start_level: u32,

    /// Log file (default: tui-miner.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("tui-miner.log"));
    init_logging(&log_path)?;
    info!(level = args.start_level, four_way = args.four_way, "starting tui-miner");

    let view = build_view(&args);

    let mut term = TerminalRenderer::new();
    let caps = term.enter()?;
    info!(key_release_events = caps.key_release_events, "terminal ready");

    let result = run(&mut term, &view, caps, &args);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exiting with error");
    }
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn build_view(args: &Args) -> GameView {
    let view = GameView::new(args.cell_width, args.cell_height);
    let (tile_w, tile_h) = view.tile_pixel_size();
    match SpriteSheet::load(&args.sprite_sheet, tile_w, tile_h) {
        Ok(sheet) => {
            info!(path = %args.sprite_sheet.display(), "sprite sheet loaded");
            view.with_sprites(sheet)
        }
        Err(err) => {
            warn!(
                path = %args.sprite_sheet.display(),
                error = %err,
                "sprite sheet unavailable, drawing placeholder"
            );
            view
        }
    }
}

fn run(term: &mut TerminalRenderer, view: &GameView, caps: TerminalCaps, args: &Args) -> Result<()> {
    let aim_mode = if args.four_way {
        AimMode::FourWay
    } else {
        AimMode::EightWay
    };
    let mut session = Session::new(args.start_level).with_aim_mode(aim_mode);

    let mut input_handler = InputHandler::new();
    if caps.key_release_events {
        input_handler = input_handler.with_key_release_timeout_ms(None);
    }

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Drain input until the next tick is due.
        let mut timeout = tick_duration.saturating_sub(last_tick.elapsed());
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = input_handler.handle_key(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        let (column, row) = pointer.cell;
                        let cursor = view.layout(viewport).cell_to_grid(column, row);
                        session.set_cursor(Some(cursor));
                        if let Some(action) = pointer.action {
                            session.apply_action(action);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            timeout = Duration::ZERO;
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(action) = input_handler.update() {
                session.apply_action(action);
            }

            let was_playing = session.is_playing();
            session.tick(TICK_MS);
            if !was_playing && session.is_playing() {
                // New level: walking restarts from a fresh key press.
                input_handler.reset();
            }

            for ev in session.take_events() {
                debug!(event = ev.as_str(), detail = ?ev, "game event");
            }
        }
    }
}
