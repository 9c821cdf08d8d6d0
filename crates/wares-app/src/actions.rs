//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::handler::UpdateAction;
use crate::message::Message;
use wares_catalog::CatalogClient;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<CatalogClient>,
) {
    match action {
        UpdateAction::FetchProducts { generation } => {
            spawn_fetch(generation, msg_tx, client);
        }
    }
}

/// Spawn the fetch task for one generation.
///
/// The task's only channel back into the app is `msg_tx`; it never touches
/// state directly. An in-flight fetch is never cancelled -- if a newer
/// generation supersedes this one, the update loop drops the resolution
/// when it arrives.
fn spawn_fetch(generation: u64, msg_tx: mpsc::Sender<Message>, client: Arc<CatalogClient>) {
    tokio::spawn(async move {
        match client.fetch_products().await {
            Ok(products) => {
                info!(
                    "fetch (generation {generation}) returned {} products",
                    products.len()
                );
                let _ = msg_tx
                    .send(Message::ProductsFetched {
                        generation,
                        products,
                    })
                    .await;
            }
            Err(err) => {
                warn!("fetch (generation {generation}) failed: {err}");
                let _ = msg_tx
                    .send(Message::ProductsFetchFailed {
                        generation,
                        message: err.user_message(),
                    })
                    .await;
            }
        }
    });
}
