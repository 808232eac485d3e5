// sortty: Animated Sorting Algorithm Visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use sortty::algorithms::catalog::Catalog;
use sortty::constants::{DEFAULT_INTERVAL_MS, DEFAULT_SIZE};
use sortty::player::{DeadlineTimer, ManualTimer, PlaybackState, Player, PlayerConfig};
use sortty::ui::App;

#[derive(Debug, Parser)]
#[command(
    name = "sortty",
    about = "Watch classic sorting algorithms reorder an array, step by step",
    version
)]
struct Cli {
    /// Algorithm id (see --list)
    #[arg(short, long, default_value = "bubble")]
    algorithm: String,

    /// Number of bars
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Milliseconds per step
    #[arg(short, long, default_value_t = DEFAULT_INTERVAL_MS)]
    speed: u64,

    /// Seed for the generated array
    #[arg(long)]
    seed: Option<u64>,

    /// Print the available algorithms and exit
    #[arg(long)]
    list: bool,

    /// Run to completion without a UI and print the counters
    #[arg(long)]
    headless: bool,

    /// Give up a headless run after this many steps
    #[arg(long, default_value_t = 1_000_000)]
    max_steps: u64,

    /// Write tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if cli.list {
        let catalog = Catalog::builtin();
        for descriptor in catalog.entries() {
            println!(
                "{:<10} {:<16} {}",
                descriptor.id, descriptor.name, descriptor.complexity
            );
        }
        return Ok(());
    }

    let config = PlayerConfig {
        algorithm: cli.algorithm.clone(),
        size: cli.size,
        interval_ms: cli.speed,
        seed: cli.seed,
    };

    if cli.headless {
        return run_headless(config, cli.max_steps);
    }

    let player = match Player::new(DeadlineTimer::new(), config) {
        Ok(player) => player,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run with --list to see the available algorithms.");
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Send tracing events to `path`; the terminal itself belongs to the TUI
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Fire every scheduled step back to back and report the counters
fn run_headless(config: PlayerConfig, max_steps: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut player = Player::new(ManualTimer::new(), config)?;
    eprintln!(
        "Sorting {} values with {}...",
        player.array().len(),
        player.algorithm().name
    );

    player.start()?;
    while player.state() == PlaybackState::Running && player.metrics().steps < max_steps {
        match player.timer_mut().fire() {
            Some(token) => {
                player.fire(token);
            }
            None => break,
        }
    }

    let metrics = player.metrics();
    if player.state() != PlaybackState::Finished {
        player.pause();
        eprintln!("Gave up after {} steps.", metrics.steps);
    }
    println!("algorithm:   {}", player.algorithm().id);
    println!("steps:       {}", metrics.steps);
    println!("comparisons: {}", metrics.comparisons);
    println!("accesses:    {}", metrics.accesses);
    println!("array:       {:?}", player.array());

    Ok(())
}
