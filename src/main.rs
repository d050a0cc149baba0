use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use flipsnake::input::{KeyAction, key_action};
use flipsnake::{Game, GameConfig, Ticker, render};

#[derive(Parser)]
#[command(name = "flipsnake")]
#[command(version, about = "Terminal snake where some food turns you around")]
struct Cli {
    /// Cells per side of the square board
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Milliseconds between moves
    #[arg(long, default_value_t = 150)]
    tick_ms: u64,

    /// Chance that new food reverses the snake
    #[arg(long, default_value_t = 0.3)]
    reversal_probability: f64,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (the terminal is busy with the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let cfg = GameConfig {
        board_size: cli.size,
        reversal_probability: cli.reversal_probability,
        tick_millis: cli.tick_ms,
    };
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(cfg, seed),
        None => Game::new(cfg),
    }
    .context("Invalid game configuration")?;

    // --- Init terminal ---
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;

    let res = run(&mut terminal, &mut game);

    // --- Restore terminal even on error ---
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    res
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "flipsnake=debug".into()))
        .init();
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, game: &mut Game) -> Result<()> {
    let mut ticker = Ticker::new(game.speed(), Instant::now());

    loop {
        // Game over stops the ticker; restart brings it back.
        ticker.set_period(game.speed(), Instant::now());

        // --- Input (non-blocking) ---
        let timeout = ticker.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key_action(key) {
                    KeyAction::Turn(dir) => {
                        game.request_direction(dir);
                    }
                    KeyAction::Restart => {
                        if game.is_over() {
                            game.restart();
                        }
                    }
                    KeyAction::Quit => return Ok(()),
                    KeyAction::None => {}
                }
            }
        }

        // --- Tick ---
        if ticker.fire(Instant::now()) {
            game.tick();
        }

        // --- Render ---
        terminal
            .draw(|f| render::draw(f, game))
            .context("Failed to draw frame")?;
    }
}
