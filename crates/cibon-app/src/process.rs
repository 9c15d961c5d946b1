//! Message processing
//!
//! Runs a message through the TEA update function, follows up on any
//! chained messages and dispatches the resulting actions.

use tokio::sync::mpsc;

use cibon_client::CollectionApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    api: &CollectionApi,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
