use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_ai::config::{AppConfig, FirstMover};
use connect_four_ai::ui::{plain, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against a minimax computer opponent.
#[derive(Parser)]
#[command(name = "connect-four", version, about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Who moves first (overrides the config file)
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    /// Line-oriented mode on stdin/stdout instead of the terminal UI
    #[arg(long)]
    plain: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FirstArg {
    Player,
    Computer,
    Random,
}

impl From<FirstArg> for FirstMover {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Player => FirstMover::Player,
            FirstArg::Computer => FirstMover::Computer,
            FirstArg::Random => FirstMover::Random,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    init_logging(cli.log_file.as_deref(), cli.plain)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(first) = cli.first {
        config.game.first_mover = first.into();
    }

    if cli.plain {
        let first = config.game.first_mover.resolve(&mut rand::rng());
        let stdin = io::stdin();
        plain::play(&config, first, stdin.lock(), io::stdout()).context("plain game")?;
        return Ok(());
    }

    run_tui(config)
}

/// The TUI owns the terminal, so logs only go to a file there. Plain mode may
/// log to stderr.
fn init_logging(log_file: Option<&Path>, plain: bool) -> Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if plain => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running game")
}
