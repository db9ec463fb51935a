//! termfolio - interactive terminal portfolio
//!
//! Shows a résumé as a scrollable page with an expandable experience
//! timeline, filterable skills and a command menu.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use termfolio::branding::{APP_BINARY_NAME, APP_DESCRIPTION, APP_DISPLAY_NAME};
use termfolio::config::{Config, MotionPreference};
use termfolio::models::Resume;
use termfolio::platform::SystemPlatform;
use termfolio::state::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeMode};
use termfolio::{logging, tui};

/// termfolio - interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Résumé file to show instead of the built-in one (.toml or .json)
    #[arg(long, value_name = "FILE")]
    resume: Option<PathBuf>,

    /// Start with this theme (light or dark) and remember it
    #[arg(long, value_name = "MODE", value_parser = parse_theme)]
    theme: Option<ThemeMode>,

    /// Turn off animations for this session
    #[arg(long)]
    reduced_motion: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the configuration file path and exit
    #[arg(long)]
    print_config_path: bool,

    /// Write a default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_theme(value: &str) -> std::result::Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("expected 'light' or 'dark', got '{value}'"))
}

/// Résumé from the command line, else the configured path, else the built-in one.
fn load_resume(cli_path: Option<&Path>, config: &Config) -> Result<Resume> {
    match cli_path.or(config.paths.resume.as_deref()) {
        Some(path) => Resume::load(path)
            .with_context(|| format!("Failed to load résumé from {}", path.display())),
        None => Resume::embedded(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config_path {
        println!("{}", Config::config_file_path()?.display());
        return Ok(());
    }

    if cli.init_config {
        let path = Config::config_file_path()?;
        if Config::exists() {
            println!("Config already exists at {}", path.display());
        } else {
            Config::new().save()?;
            println!("Wrote default config to {}", path.display());
        }
        return Ok(());
    }

    let log_path = logging::init(cli.verbose);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting {APP_DISPLAY_NAME}");

    // A corrupt config falls back to defaults
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e:#}");
            tracing::warn!("Failed to load config, using defaults: {e:#}");
            Config::new()
        }
    };
    if cli.reduced_motion {
        config.ui.reduced_motion = MotionPreference::On;
    }

    let resume = load_resume(cli.resume.as_deref(), &config)?;

    let store: Box<dyn PreferenceStore> = match FilePreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Preferences unavailable, theme will not persist: {e:#}");
            Box::new(MemoryPreferenceStore::new())
        }
    };

    let platform = SystemPlatform::new(config.paths.download_dir.clone())
        .with_clipboard()
        .with_os_theme_watch(Duration::from_millis(config.ui.os_theme_poll_ms));
    let mut app_state = tui::AppState::new(resume, config, Box::new(platform), store, Instant::now());
    if let Some(mode) = cli.theme {
        app_state.set_theme(mode);
    }

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    if let Err(e) = result {
        tracing::error!("{e:#}");
        if let Some(path) = log_path {
            eprintln!("Details were logged to {}", path.display());
        }
        return Err(e);
    }

    Ok(())
}
