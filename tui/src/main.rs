//! labcalc TUI Entry Point
//!
//! Launches the terminal menu of lab calculators.
//!
//! Usage:
//!   labcalc [OPTIONS]
//!
//! Options:
//!   --config <PATH>  TOML settings file (env: LABCALC_CONFIG)
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default: warn).

use std::io;
use std::panic;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use labcalc_core::LabcalcConfig;
use labcalc_tui::App;

/// Menu-driven lab calculators in the terminal
#[derive(Debug, Parser)]
#[command(name = "labcalc", version, about)]
struct Cli {
    /// TOML settings file; LABCALC_* variables override its values
    #[arg(long, env = "LABCALC_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: labcalc requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or the session");
        eprintln!("has no terminal (CI, container, SSH without -t).");
        std::process::exit(1);
    }

    let mut app = App::new(&config)?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    if let Some(farewell) = app.farewell() {
        println!("{farewell}");
    }

    Ok(())
}

/// Defaults, then the optional TOML file, then `LABCALC_*` overrides
fn load_config(path: Option<&Path>) -> anyhow::Result<LabcalcConfig> {
    let config = match path {
        Some(path) => {
            let document = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            LabcalcConfig::from_toml_str(&document)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => LabcalcConfig::default(),
    };

    let config = config.apply_env().context("applying LABCALC_* overrides")?;
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}
