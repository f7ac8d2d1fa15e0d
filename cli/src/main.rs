//! Life CLI - binary entry point and the driving event loop.
//!
//! # Architecture
//!
//! The binary bridges [`life_core`] (the automaton engine) and [`life_tui`]
//! (rendering and input), providing RAII-based terminal management with
//! guaranteed cleanup.
//!
//! # Event loop
//!
//! One task owns the single [`Game`] and serializes every mutation:
//!
//! 1. `select!` over the input command channel and the generation ticker
//! 2. Apply exactly one engine operation (or one step, when running)
//! 3. Render the frame
//!
//! The input pump thread only translates terminal events into symbolic
//! commands; it never touches the board.

mod config;

use std::fs::{self, File, OpenOptions};
use std::io::{Stdout, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    size as terminal_size,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Size;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use life_core::Game;
use life_patterns::{Presets, parse_file};
use life_tui::{CELL_WIDTH, Command, InputPump, Themes, board_size, draw};

use crate::config::LifeConfig;

const DEFAULT_PERIOD_MS: u64 = 100;

/// Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(name = "life", version, about)]
struct Args {
    /// Board width in cells (defaults to what fits the terminal)
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells (defaults to what fits the terminal)
    #[arg(long)]
    height: Option<usize>,

    /// Pattern file (.rle, .cells or .life) inserted at the origin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Milliseconds between generations
    #[arg(short, long)]
    period: Option<u64>,

    /// Starting theme name
    #[arg(short, long)]
    theme: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // The terminal belongs to the UI: logs go to a file, or nowhere.
    if let Some(file) = open_log_file() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }
}

fn open_log_file() -> Option<File> {
    let dir = dirs::state_dir().or_else(dirs::data_dir)?.join("life");
    fs::create_dir_all(&dir).ok()?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("life.log"))
        .ok()
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and mouse capture are all restored even
/// after panics or early returns, keeping the terminal usable.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    let config = LifeConfig::load();

    // Everything that can fail with a message worth reading happens before
    // the terminal is put into raw mode.
    let pattern = match &args.file {
        Some(path) => Some(
            parse_file(path).with_context(|| format!("load pattern {}", path.display()))?,
        ),
        None => None,
    };
    let mut presets = Presets::new().context("load preset catalog")?;

    let mut themes = Themes::new();
    if let Some(name) = args.theme.as_deref().or(config.theme.as_deref())
        && !themes.select(name)
    {
        tracing::warn!("unknown theme {name:?}, keeping {:?}", themes.name());
    }

    let period = Duration::from_millis(
        args.period
            .or(config.period_ms)
            .unwrap_or(DEFAULT_PERIOD_MS)
            .max(1),
    );

    let (columns, lines) = terminal_size().context("query terminal size")?;
    let (fit_width, fit_height) = board_size(Size::new(columns, lines));
    let mut game = Game::new(
        args.width.unwrap_or(fit_width),
        args.height.unwrap_or(fit_height),
    );
    if let Some(pattern) = &pattern {
        game.insert(0, 0, pattern);
    }

    tracing::info!(
        width = game.width(),
        height = game.height(),
        period_ms = period.as_millis() as u64,
        "starting"
    );

    let mut session = TerminalSession::new()?;
    run(
        &mut session.terminal,
        &mut game,
        &mut presets,
        &mut themes,
        period,
    )
    .await
}

async fn run<B>(
    terminal: &mut Terminal<B>,
    game: &mut Game,
    presets: &mut Presets,
    themes: &mut Themes,
    period: Duration,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut paused = true;
    let mut show_help = true;
    let mut generation: u64 = 0;

    loop {
        tokio::select! {
            command = input.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::Quit => break,
                    Command::TogglePause => paused = !paused,
                    Command::Step => {
                        game.step();
                        generation += 1;
                    }
                    Command::Clear => {
                        game.clear();
                        generation = 0;
                    }
                    Command::Randomize => {
                        game.randomize();
                        generation = 0;
                    }
                    Command::NextTheme => themes.next(),
                    Command::NextPreset => presets.next(),
                    Command::InsertPreset => {
                        game.clear();
                        game.insert(0, 0, presets.cells());
                        generation = 0;
                    }
                    Command::ToggleHelp => show_help = !show_help,
                    Command::ToggleCell { column, row } => {
                        game.toggle(i64::from(column / CELL_WIDTH), i64::from(row));
                    }
                    Command::InsertAt { column, row } => {
                        game.insert(
                            i64::from(column / CELL_WIDTH),
                            i64::from(row),
                            presets.cells(),
                        );
                    }
                    Command::Resize { width, height } => {
                        let (board_width, board_height) = board_size(Size::new(width, height));
                        game.resize(board_width, board_height);
                    }
                }
            }
            _ = ticker.tick() => {
                if !paused {
                    game.step();
                    generation += 1;
                }
            }
        }

        let overlay = if paused && show_help {
            help_overlay(game.height(), generation, themes.name(), presets.name())
        } else {
            Vec::new()
        };
        terminal.draw(|frame| draw(frame, game.rows(), themes, &overlay))?;
    }
    Ok(())
}

fn help_overlay(height: usize, generation: u64, theme: &str, preset: &str) -> Vec<(u16, String)> {
    let bottom = |up: u16| (height as u16).saturating_sub(up);
    vec![
        (0, format!("Generation: {generation}")),
        (bottom(4), format!("<t> switch theme, current: \"{theme}\"")),
        (
            bottom(3),
            format!("<p> switch preset, <i> insert preset, current: \"{preset}\""),
        ),
        (
            bottom(2),
            "left click: toggle cell, right click: insert preset here".to_string(),
        ),
        (
            bottom(1),
            "<SPC> pause, <RET>/<s> step, <c> clear, <r> random, <h> hide help, <q> quit"
                .to_string(),
        ),
    ]
}
