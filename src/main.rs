use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use folio::app::features::effects::Services;
use folio::app::persistence;
use folio::app::{r#loop::run_loop, state::AppState};
use folio::config::{get_config_dir, Config};
use folio::infrastructure::clipboard::SystemClipboard;
use folio::logging;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    let _log_guard = get_config_dir().and_then(|dir| logging::init(&dir.join("logs")));

    // Config errors surface before the terminal enters raw mode
    let config = Config::load().context("failed to load config")?;
    let items = config.command_items().context("invalid [[commands]] entry")?;

    let state_path = persistence::get_state_path();
    let flags = state_path
        .as_deref()
        .map(persistence::load_flags)
        .unwrap_or_default();

    let app_state = AppState::new(&config, items, flags.hint_seen);
    let services = Services {
        clipboard: Arc::new(SystemClipboard::new()),
        state_path,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "folio exited with an error");
        eprintln!("{err:?}");
    }

    Ok(())
}
