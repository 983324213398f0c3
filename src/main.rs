use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use link_four::config::AppConfig;
use link_four::game::{GameEngine, VerticalGuard};
use link_four::headless;
use link_four::ui::App;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Link Four in the terminal.
#[derive(Parser)]
#[command(name = "link_four", about = "Four-in-a-row connection game")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "link_four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Override the run length needed to win
    #[arg(long)]
    win_length: Option<usize>,

    /// Guard upward vertical scans with the right edge instead of the top edge
    #[arg(long)]
    legacy_vertical_guard: bool,

    /// Play these comma-separated cell indices without the TUI, then print the board
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Write logs to this file (interactive mode logs nowhere otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    init_logging(&cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.rules.width = width;
    }
    if let Some(height) = cli.height {
        config.rules.height = height;
    }
    if let Some(win_length) = cli.win_length {
        config.rules.win_length = win_length;
    }
    if cli.legacy_vertical_guard {
        config.rules.vertical_guard = VerticalGuard::Legacy;
    }
    config.validate().context("invalid configuration")?;

    let engine = GameEngine::new(config.rules)?;
    info!(
        width = engine.width(),
        height = engine.height(),
        win_length = config.rules.win_length,
        "engine ready"
    );

    match cli.moves {
        Some(moves) => play_headless(engine, &moves),
        None => run_tui(App::new(engine, config.ui)),
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.moves.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn play_headless(mut engine: GameEngine, moves: &[usize]) -> Result<()> {
    let outcome = headless::replay(&mut engine, moves, &mut io::stdout().lock())?;
    info!(?outcome, moves = engine.move_count(), "replay finished");
    Ok(())
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
