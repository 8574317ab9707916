/*
[INPUT]:  UI config, optional log buffer, terminal input events
[OUTPUT]: Ratatui-based TUI for creating, editing and completing tasks
[POS]:    TUI module for tasklist-tui binary
[UPDATE]: When changing the event loop or input thread
*/

mod app;
mod events;
mod terminal;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use tasklist_store::TaskStore;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::UiConfig;
use crate::logging::LogBufferHandle;

use self::app::AppState;
use self::terminal::TerminalGuard;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

/// Run the interactive task list until the user quits.
///
/// The store lives inside this function; every action is applied on this
/// task, in the order the input thread delivered the events.
pub async fn run_tui(config: &UiConfig, log_buffer: Option<LogBufferHandle>) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_shutdown_clone = input_shutdown.clone();

    let input_task = tokio::task::spawn_blocking(move || {
        while !input_shutdown_clone.is_cancelled() {
            match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => match crossterm::event::read() {
                    Ok(event) => {
                        if event_tx.send(UiEvent::Input(event)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(err) => {
                    warn!(error = %err, "failed to poll terminal events");
                    break;
                }
            }
        }
    });

    let mut app = AppState::new(TaskStore::new(), log_buffer);
    info!("task list ready");

    let mut tick = tokio::time::interval(Duration::from_millis(config.tick_rate_ms));
    let mut should_quit = false;

    terminal.draw(|frame| ui::draw_ui(frame, &mut app))?;
    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(event)) => {
                        should_quit = events::handle_event(&mut app, &event);
                    }
                    None => {
                        warn!("input thread stopped");
                        should_quit = true;
                    }
                }
            }
        }

        terminal.draw(|frame| ui::draw_ui(frame, &mut app))?;
    }

    input_shutdown.cancel();
    drop(app);
    if let Err(err) = input_task.await {
        warn!(error = %err, "input thread join failed");
    }
    Ok(())
}
