//! Radar TUI — three-view terminal dashboard with vim-style navigation.
//!
//! Views:
//! 1. Main — stat cards, filters and the radar table
//! 2. Statistics — distributions and drill-down
//! 3. Data Management — CSV export / import

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use radar_core::DashboardConfig;
use radar_tui::app::{AppState, ErrorCategory};
use radar_tui::{input, logging, persistence, ui};

const APP_DIR: &str = "radar-tracker";

#[derive(Parser)]
#[command(name = "radar-tui", about = "Radar tracking dashboard")]
struct Args {
    /// CSV file to load instead of generated sample data
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file (defaults to <config dir>/radar-tracker/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Paths
    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR);
    let config_path = app_dir.join("config.toml");
    let state_path = app_dir.join("state.json");
    let log_path = dirs::state_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| app_dir.clone())
        .join("radar-tui.log");

    logging::init_file(&log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let config = DashboardConfig::load(args.config.as_deref(), Some(&config_path))
        .context("load config")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Build app state
    let mut app = AppState::with_sample_data(config);
    let persisted = persistence::load(&state_path);
    persistence::apply(&mut app, persisted);
    if let Some(path) = &args.data {
        app.import(path);
        if app.data.last_import.is_none() {
            app.push_error(
                ErrorCategory::Import,
                "Falling back to sample data".into(),
                path.display().to_string(),
            );
        }
    }
    info!(records = app.dashboard.len(), "dashboard ready");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    let persisted = persistence::extract(&app);
    if let Err(e) = persistence::save(&state_path, &persisted) {
        error!(error = %e, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
