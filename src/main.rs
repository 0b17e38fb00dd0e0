//! Terminal runner (default binary).
//!
//! Owns the terminal, paces frames at `TICK_MS`, feeds the engine the elapsed
//! time and the intents gathered during the frame, then draws the snapshot.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{Layer, Registry};

use blockfall::core::{GameEngine, GameSnapshot};
use blockfall::input::{drain_intents, FrameIntents};
use blockfall::term::{Canvas, GameView, TerminalScreen, Viewport};
use blockfall::types::TICK_MS;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Seed for piece selection (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Write logs to this file; logs are discarded otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!(seed, "starting");

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen, seed);

    // Always try to restore terminal state.
    let _ = screen.leave();
    result
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // The game owns the terminal; without a log file nothing is formatted at all.
    tracing_subscriber::registry()
        .with(file_layer(cli.log_file.as_deref())?)
        .with(LevelFilter::from_level(level))
        .init();
    Ok(())
}

/// Plain-text `fmt` layer writing to `path`, or none when no path is given
fn file_layer(path: Option<&Path>) -> Result<Option<impl Layer<Registry>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let file =
        File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    Ok(Some(
        tracing_subscriber::fmt::layer::<Registry>()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file)),
    ))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(screen: &mut TerminalScreen, seed: u32) -> Result<()> {
    let mut engine = GameEngine::new(seed);
    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut canvas = Canvas::new(0, 0);
    let mut frame = FrameIntents::new();

    let frame_budget = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        engine.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snapshot, Viewport::new(w, h), &mut canvas);
        screen.present(&canvas)?;

        let timeout = frame_budget.saturating_sub(last_tick.elapsed());
        drain_intents(timeout, &mut frame)?;
        if frame.resized() {
            screen.invalidate();
        }

        let now = Instant::now();
        let delta = now.duration_since(last_tick).as_secs_f64();
        last_tick = now;

        let report = engine.tick(delta, frame.intents());
        if report.lines_cleared > 0 {
            info!(
                rows = report.lines_cleared,
                score = engine.score(),
                "rows cleared"
            );
        }
        if report.quit {
            info!(score = engine.score(), level = engine.level(), "quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_no_layer() {
        let layer = file_layer(None).unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn log_file_is_created() {
        let path = std::env::temp_dir().join(format!("blockfall-log-{}.txt", std::process::id()));
        let layer = file_layer(Some(&path)).unwrap();
        assert!(layer.is_some());
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let dir = std::env::temp_dir().join("blockfall-missing-dir").join("nested");
        let path = dir.join("log.txt");
        assert!(file_layer(Some(&path)).is_err());
    }
}
