//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task against a clone of the
//! [`CollectionApi`] and reports back with a single [`Message`].

use tokio::sync::mpsc;

use cibon_client::CollectionApi;
use cibon_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, api: &CollectionApi, msg_tx: mpsc::Sender<Message>) {
    let api = api.clone();
    tokio::spawn(async move {
        let message = execute_action(action, &api).await;
        if msg_tx.send(message).await.is_err() {
            debug!("Message channel closed before action result was delivered");
        }
    });
}

/// Run an action to completion and turn its outcome into a message
pub async fn execute_action(action: UpdateAction, api: &CollectionApi) -> Message {
    match action {
        UpdateAction::Load {
            generation,
            page_size,
        } => match api.load(page_size).await.context("Load failed") {
            Ok(collection) => Message::LoadCompleted {
                generation,
                collection: Box::new(collection),
            },
            Err(e) => Message::LoadFailed {
                generation,
                error: e.to_string(),
            },
        },

        UpdateAction::Navigate { generation, href } => match api
            .navigate(&href)
            .await
            .with_context(|| format!("Navigation to {} failed", href))
        {
            Ok(page) => Message::PageLoaded {
                generation,
                page: Box::new(page),
            },
            Err(e) => Message::LoadFailed {
                generation,
                error: e.to_string(),
            },
        },

        UpdateAction::Create { fields, page_size } => {
            match api.create(&fields, page_size).await.context("Create failed") {
                Ok(links) => Message::RecordCreated { links },
                Err(e) => Message::MutationFailed {
                    operation: "Create",
                    error: e.to_string(),
                },
            }
        }

        UpdateAction::Update { record, fields } => match api.update(&record, &fields).await {
            // An expected outcome, not logged as an error
            Err(e) if e.is_conflict() => {
                warn!("Update of {} rejected: {}", record.self_href, e);
                Message::UpdateConflict {
                    href: record.self_href.clone(),
                }
            }
            result => match result.with_context(|| format!("Update of {} failed", record.self_href)) {
                Ok(()) => Message::RecordUpdated,
                Err(e) => Message::MutationFailed {
                    operation: "Update",
                    error: e.to_string(),
                },
            },
        },

        UpdateAction::Delete { href } => match api
            .delete(&href)
            .await
            .with_context(|| format!("Delete of {} failed", href))
        {
            Ok(()) => Message::RecordDeleted,
            Err(e) => Message::MutationFailed {
                operation: "Delete",
                error: e.to_string(),
            },
        },
    }
}
