//! PRODCAT - Terminal Product Catalog
//!
//! A terminal-based manager for a product catalog held in a remote document
//! store. Lists products, shows a selected product's detail, and offers a
//! form to add or delete products, delegating persistence to the remote
//! service.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::EnvFilter;

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use infrastructure::{worker, RestStore, StoreEvent, StoreHandle};
use presentation::{render_ui, InputHandler};

/// How long the loop waits for a key before checking for completions.
const TICK: Duration = Duration::from_millis(50);

#[derive(Parser, Debug)]
#[command(name = "prodcat", about = "Terminal product catalog manager")]
struct Cli {
    /// Base URL of the product service
    #[arg(long, env = "PRODCAT_URL", default_value = "http://localhost:7878/api")]
    url: String,

    /// Log file path (the terminal itself is occupied by the UI)
    #[arg(long, default_value = "prodcat.log")]
    log_file: String,
}

/// Entry point for the PRODCAT terminal catalog application.
///
/// Parses the CLI, initializes file-backed logging, spawns the store
/// worker, issues the one-shot catalog load, and runs the UI loop until the
/// user quits.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or terminal setup
/// fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let (store, events) = worker::spawn(Box::new(RestStore::new(cli.url)));
    // Mount-time load, issued exactly once per run.
    store.fetch_all();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::default();
    let res = run_app(&mut terminal, &mut app, &store, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn init_logging(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main application event loop.
///
/// Each tick drains completed store requests into the page state, redraws,
/// and then processes at most one key event. Continues until the user
/// presses 'q' outside the form.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &StoreHandle,
    events: &Receiver<StoreEvent>,
) -> io::Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            apply_store_event(app, event);
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if !app.form_visible => return Ok(()),
                        _ => InputHandler::handle_key_event(app, store, key.code, key.modifiers),
                    }
                }
            }
        }
    }
}

/// Routes a store completion to the matching page transition.
fn apply_store_event(app: &mut App, event: StoreEvent) {
    match event {
        StoreEvent::LoadCompleted(result) => app.set_load_result(result),
        StoreEvent::DeleteCompleted { id, result } => app.set_delete_result(&id, result),
        StoreEvent::CreateCompleted(result) => app.set_create_result(result),
    }
}
