//! Main TUI runner - entry point and event loop
//!
//! Contains the core application lifecycle:
//! - `run`: terminal setup, initial fetch, main loop, teardown
//! - `run_loop`: main event loop processing channel messages and terminal events

use std::sync::Arc;

use tokio::sync::mpsc;

use wares_app::message::Message;
use wares_app::state::AppState;
use wares_app::{process, Settings};
use wares_catalog::CatalogClient;
use wares_core::prelude::*;

use crate::theme::{palette, Palette};
use crate::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Validate the endpoint before touching the terminal
    let client = Arc::new(CatalogClient::from_endpoint(&settings.catalog.endpoint)?);
    let active_palette = palette::for_mode(settings.ui.theme);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings);

    // Unified message channel: fetch tasks report back through it
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Kick off the initial load before the first frame
    process::process_message(&mut state, Message::Reload, &msg_tx, &client);

    // Run the main loop
    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        msg_tx,
        client,
        active_palette,
    );

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<CatalogClient>,
    active_palette: &Palette,
) -> Result<()> {
    while !state.should_quit() {
        // Process resolved fetch results (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state, active_palette))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &client);
        }
    }

    info!("quit requested, leaving run loop");
    Ok(())
}
