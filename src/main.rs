//! Speedway runner (default binary).
//!
//! `speedway` plays in the terminal; `speedway frame` runs headless and saves
//! the last frame as a PNG.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use speedway::config::{AppConfig, Command, FrameConfig, PlayConfig, USAGE};
use speedway::engine::{Session, SessionStatus};
use speedway::input::{handle_key_event, should_quit, InputCommand};
use speedway::raster::Renderer;
use speedway::term::{GameView, TermBuffer, TerminalRenderer, Viewport};
use speedway::types::{GameAction, DEFAULT_TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(config.log_path.as_deref())?;

    match config.command {
        Command::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Command::Frame(cfg) => run_frame(&cfg),
        Command::Play(cfg) => run_play(&cfg),
    }
}

fn init_logging(log_path: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run_frame(cfg: &FrameConfig) -> Result<()> {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut session = Session::new(seed, DEFAULT_TICK_MS);

    let mut ran = 0;
    while ran < cfg.ticks && session.status() != SessionStatus::GameOver {
        session.step();
        ran += 1;
    }

    let image = Renderer::new(cfg.cell_size).render(session.snapshot());
    image
        .save_png(&cfg.out)
        .with_context(|| format!("writing {}", cfg.out.display()))?;

    let stats = session.stats();
    info!("saved frame after {} ticks to {}", ran, cfg.out.display());
    println!(
        "{}: {}x{} after {} ticks (seed {}, score {}, level {}, lives {})",
        cfg.out.display(),
        image.width(),
        image.height(),
        ran,
        seed,
        stats.score,
        stats.level,
        stats.lives
    );
    Ok(())
}

fn run_play(cfg: &PlayConfig) -> Result<()> {
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, cfg, seed);

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("failed to restore terminal: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, cfg: &PlayConfig, seed: u32) -> Result<()> {
    let mut session = Session::new(seed, cfg.tick_ms);
    let mut view = GameView::new(cfg.cell_size);
    let mut fb = TermBuffer::new(0, 0);
    let mut last = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let stats = session.stats();
        view.render_into(session.snapshot(), &stats, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = Duration::from_millis(session.pacer().remaining_ms() as u64);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    let repeat = key.kind == KeyEventKind::Repeat;
                    match handle_key_event(key) {
                        // Auto-repeat only steers.
                        Some(InputCommand::Game(action)) if !repeat || is_move(action) => {
                            session.apply(action);
                        }
                        _ if repeat => {}
                        Some(InputCommand::Faster) => {
                            session.faster();
                        }
                        Some(InputCommand::Slower) => {
                            session.slower();
                        }
                        Some(InputCommand::Game(_)) | None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis().min(u32::MAX as u128) as u32;
        last = now;
        session.advance(elapsed);
    }
}

fn is_move(action: GameAction) -> bool {
    matches!(action, GameAction::MoveLeft | GameAction::MoveRight)
}
