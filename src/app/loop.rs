use crate::app::{
    action::Action,
    command::Command,
    features::effects::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    state::{
        hint::{HintPhase, HINT_DELAY},
        AppState,
    },
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

/// Drives smooth scrolling and the timers checked on `Tick`.
const FRAME_RATE: Duration = Duration::from_millis(33);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(FRAME_RATE);

    if app_state.hint == HintPhase::Pending {
        handle_command(
            Command::After(HINT_DELAY, Box::new(Action::ShowHint)),
            &services,
            action_tx.clone(),
        );
    }

    tracing::info!(
        owner = %app_state.owner,
        theme = app_state.palette_type.label(),
        commands = app_state.palette.items.len(),
        "session started"
    );

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &services, action_tx.clone());
            }
        }
    }

    tracing::info!(
        elapsed_secs = app_state.started_at.elapsed().as_secs(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
