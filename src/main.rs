//! Termfolio - an interactive terminal portfolio.
//!
//! Tabbed pages (Home, About, Projects, Contact) with a light/dark theme
//! resolved from a persisted preference and the OS color scheme.

// Module declarations
mod branding;
mod config;
mod models;
mod tui;

use anyhow::Result;
use clap::Parser;

use branding::APP_DISPLAY_NAME;
use config::Config;
use tui::ThemeMode;

/// Termfolio - interactive terminal portfolio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start with an explicit theme for this session (does not persist)
    #[arg(long, value_parser = parse_theme_mode, value_name = "light|dark")]
    theme: Option<ThemeMode>,
}

fn parse_theme_mode(value: &str) -> Result<ThemeMode, String> {
    match value {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        _ => Err(format!("Unknown theme \"{value}\" (expected light or dark)")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{} v{}", APP_DISPLAY_NAME, env!("CARGO_PKG_VERSION"));

    // A corrupted config file should not keep the portfolio from starting
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!("Continuing with defaults.");
            Config::new()
        }
    };

    let mut app_state = tui::AppState::new(config, cli.theme)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal before surfacing any run error
    tui::restore_terminal(terminal)?;
    result?;

    Ok(())
}
