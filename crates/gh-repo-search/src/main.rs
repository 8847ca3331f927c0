use anyhow::{Context, Result};
use gh_search_client::{connect, ClientSettings};
use gh_search_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use middleware::{
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    search_middleware::SearchMiddleware,
};
use state::AppState;
use store::Store;

/// Input poll interval; also the tick rate for notice expiry
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting gh-repo-search, logging to {}", log_file.display());

    let app_config = AppConfig::load();

    // Connect before taking over the terminal so setup errors stay readable
    let runtime = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let settings = ClientSettings {
        api_url: app_config.api_url.clone(),
        host: app_config.host.clone(),
        token: app_config.token.clone(),
        timeout: app_config.request_timeout(),
    };
    let client = runtime.block_on(connect(&settings)).inspect_err(|e| {
        log::error!("Failed to set up search client: {:#}", e);
    })?;

    let mut store = Store::new(AppState::new(app_config));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SearchMiddleware::new(runtime, Arc::new(client))));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Application error: {:#}", err);
    }

    log::info!("Exiting gh-repo-search");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, store: &mut Store) -> Result<()> {
    loop {
        // Apply finished fetches before drawing
        store.process_pending();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        } else {
            store.dispatch(Action::Global(GlobalAction::Tick));
        }
    }

    Ok(())
}
