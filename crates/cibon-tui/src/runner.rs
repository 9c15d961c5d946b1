//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use cibon_app::config::Settings;
use cibon_app::message::Message;
use cibon_app::process::process_message;
use cibon_app::signals;
use cibon_app::state::AppState;
use cibon_client::CollectionApi;
use cibon_core::prelude::*;

use super::{event, render, terminal};

/// Run the farmer desk against the configured API root
pub async fn run(settings: Settings) -> Result<()> {
    let api = CollectionApi::new(
        &settings.api.root,
        settings.api.collection_rel.clone(),
        settings.request_timeout(),
    )?;
    info!(
        "Browsing '{}' at {} (page size {})",
        api.rel(),
        api.root(),
        settings.ui.page_size
    );

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(&settings);

    // Unified message channel: request results and the signal handler
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    // Schema and first page
    process_message(&mut state, Message::Reload, &api, &msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &api);

    ratatui::restore();
    info!("Terminal restored");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &CollectionApi,
) -> Result<()> {
    while !state.should_quit() {
        // Results of background requests
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, api, msg_tx);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, api, msg_tx);
        }
    }

    Ok(())
}
