//! Wanted TUI - terminal browser for a wanted-persons case listing.
//!
//! Main entry point and event loop for the application.

mod actions;
mod app;
mod config;
mod model;
mod reports;
mod source;
mod ui;
mod view;

use actions::{ActionHandler, DesktopActions, Inert, dispatch};
use anyhow::Context;
use app::{App, UiMode};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reports::ReportLog;
use source::{JsonFileSource, RecordSource, SampleCatalog};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Browse wanted-person cases in the terminal.
#[derive(Debug, Parser)]
#[command(name = "wanted-tui", version, about)]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON records file (overrides the config; relative to the working directory)
    #[arg(long)]
    records: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the rendered listing to stdout and exit
    #[arg(long)]
    dump: bool,

    /// Browse only: report and emergency controls do nothing
    #[arg(long)]
    read_only: bool,

    /// Write the current settings to the config file and exit
    #[arg(long)]
    write_config: bool,
}

/// Main application entry point.
///
/// # Details
/// Loads configuration and records, sets up logging and the terminal, and
/// runs the event loop.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.write_config {
        config.save(cli.config.as_deref())?;
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_config_path()?,
        };
        println!("Wrote {}", path.display());
        return Ok(());
    }

    init_logging(&config, cli.verbose)?;

    let records_path = match &cli.records {
        Some(path) => Some(path.clone()),
        None => config.records_file_path()?,
    };
    let record_source: Box<dyn RecordSource> = match records_path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleCatalog),
    };

    let records = record_source
        .load()
        .with_context(|| format!("Failed to load {}", record_source.describe()))?;
    info!(count = records.len(), source = %record_source.describe(), "records loaded");
    for warning in source::audit(&records) {
        warn!(%warning, "data quality");
    }

    let mut app = App::new(&records);

    if cli.dump {
        println!("{}", app.listing.to_text());
        return Ok(());
    }

    let mut handler: Box<dyn ActionHandler> = if cli.read_only {
        app.set_status(format!(
            "Loaded {} cases from {} (read-only)",
            app.card_count(),
            record_source.describe()
        ));
        Box::new(Inert)
    } else {
        let reports_path = config.reports_file_path()?;
        let reports = ReportLog::load(&reports_path)?;
        if let Some((case_id, at)) = reports.recent().first() {
            info!(case_id, %at, "last filed report");
        }
        app.reported.extend(reports.case_ids().map(str::to_string));
        app.set_status(format!(
            "Loaded {} cases from {} ({} reported so far)",
            app.card_count(),
            record_source.describe(),
            reports.reported_count()
        ));
        Box::new(DesktopActions::new(
            reports,
            reports_path,
            config.report_command.clone(),
            config.emergency_command.clone(),
        ))
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, handler.as_mut()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

/// Send tracing output to the log file; the terminal belongs to the UI.
fn init_logging(config: &Config, verbose: bool) -> anyhow::Result<()> {
    let log_path = config.log_file_path()?;
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

/// Main event loop.
///
/// # Details
/// Handles keyboard and mouse events, dispatches control actions, collects
/// finished background commands and renders the UI.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    handler: &mut dyn ActionHandler,
) -> anyhow::Result<()> {
    // Grid area, updated on each render for mouse hit-testing
    let mut grid_area = ratatui::layout::Rect::default();

    loop {
        app.poll_pending().await;

        terminal.draw(|f| {
            let areas = ui::layout(f.area());
            grid_area = areas.grid;
            app.columns = ui::grid_columns(areas.grid.width.saturating_sub(2));
            ui::render_ui(f, app, &areas);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }

                let action = match app.mode {
                    UiMode::Details(_) => match key.code {
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('d') => {
                            app.close_details();
                            None
                        }
                        KeyCode::Char('r') => app.card_action(0),
                        KeyCode::Char('e') => Some(app.emergency_action()),
                        _ => None,
                    },
                    UiMode::Grid => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.move_up();
                            None
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.move_down();
                            None
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            app.move_left();
                            None
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.move_right();
                            None
                        }
                        KeyCode::Enter | KeyCode::Char('d') => app.card_action(1),
                        KeyCode::Char('r') => app.card_action(0),
                        KeyCode::Char('e') => Some(app.emergency_action()),
                        KeyCode::Char('f') => app.toolbar_action(0),
                        KeyCode::Char('s') => app.toolbar_action(1),
                        _ => None,
                    },
                };

                if let Some(action) = action {
                    let outcome = dispatch(handler, &action);
                    app.apply_outcome(&action, outcome);
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app, grid_area),
            _ => {}
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Details
/// Wheel moves the selection by one row; left click selects the card under
/// the cursor.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, grid_area: ratatui::layout::Rect) {
    if app.mode != UiMode::Grid {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.move_up(),
        MouseEventKind::ScrollDown => app.move_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = ui::card_index_at(app, grid_area, mouse.column, mouse.row) {
                app.selected_index = index;
            }
        }
        _ => {}
    }
}
