use invest_tui::app::{AppConfig, AppState};
use invest_tui::cli::Cli;
use invest_tui::events::{AppEvent, EventHandler};
use invest_tui::input;
use invest_tui::seed;
use invest_tui::store::{InvestmentStore, MemoryStore};
use invest_tui::subscription::SnapshotForwarder;
use invest_tui::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);

fn setup_verbose_logging() -> Result<()> {
    let state_dir = state_dir();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!(
        "invest v{} starting with verbose logging",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn state_dir() -> std::path::PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        std::path::PathBuf::from(state).join("invest-tui")
    } else if let Some(home) = std::env::var_os("HOME") {
        std::path::PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("invest-tui")
    } else {
        std::env::temp_dir().join("invest-tui")
    }
}

/// Spawns `fut` and turns a panic into an error toast instead of a silent death.
fn spawn_monitored(
    tx: mpsc::UnboundedSender<AppEvent>,
    label: &'static str,
    fut: impl Future<Output = ()> + Send + 'static,
) {
    tokio::spawn(async move {
        let handle = tokio::spawn(fut);
        if let Err(join_err) = handle.await {
            let msg = if join_err.is_panic() {
                match join_err.into_panic().downcast::<String>() {
                    Ok(s) => *s,
                    Err(payload) => match payload.downcast::<&str>() {
                        Ok(s) => s.to_string(),
                        Err(_) => "unknown panic".to_string(),
                    },
                }
            } else {
                "task cancelled".to_string()
            };
            tracing::error!("{label} panicked: {msg}");
            if tx
                .send(AppEvent::Error(format!("{label} crashed: {msg}")))
                .is_err()
            {
                tracing::warn!("{label}: channel closed while reporting panic");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.verbose {
        setup_verbose_logging()?;
    }

    // Seed before touching the terminal so file errors print normally.
    let store = Arc::new(MemoryStore::new());
    if args.sample {
        seed::load_into(&*store, &seed::sample_entries());
    }
    if let Some(path) = &args.seed {
        let entries = seed::read_seed_file(path)?;
        let added = seed::load_into(&*store, &entries);
        tracing::info!("seeded {added} investments from {}", path.display());
    }

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = AppState::new(AppConfig {
        currency: args.currency.clone(),
    });

    let events = EventHandler::new(TICK_RATE);
    let tx = events.sender();
    let forwarder = SnapshotForwarder::new(store.subscribe(), tx.clone());
    spawn_monitored(tx, "snapshot forwarder", forwarder.run());

    let result = run_app(&mut terminal, &mut state, events, &*store).await;

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    mut events: EventHandler,
    store: &dyn InvestmentStore,
) -> Result<()> {
    loop {
        terminal.draw(|f| tui::render::render(f, state))?;

        state.prune_notifications();
        state.prune_error();

        let Some(event) = events.next().await else {
            return Ok(());
        };
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, &state.input_context());
                state.handle_action(action, store);
            }
            AppEvent::Tick => {}
            AppEvent::Snapshot(items) => state.apply_snapshot(items),
            AppEvent::Error(e) => state.set_error(e),
        }

        if state.should_quit {
            events.stop();
            return Ok(());
        }
    }
}
