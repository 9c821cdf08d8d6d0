//! Message processing
//!
//! Drives a message (and any follow-ups it produces) through the TEA
//! update function and dispatches resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<wares_catalog::CatalogClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(client));
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use wares_core::LoadState;

    fn test_client() -> Arc<wares_catalog::CatalogClient> {
        Arc::new(wares_catalog::CatalogClient::from_endpoint("http://127.0.0.1:1/products").unwrap())
    }

    #[tokio::test]
    async fn test_key_follow_ups_are_applied_in_one_pass() {
        let mut state = AppState::new();
        let (msg_tx, _msg_rx) = mpsc::channel::<Message>(8);
        let client = test_client();

        // A single key event flows key -> QueryPush -> state mutation
        process_message(&mut state, Message::Key(InputKey::Char('z')), &msg_tx, &client);

        assert_eq!(state.search.query, "z");
    }

    #[tokio::test]
    async fn test_reload_key_dispatches_a_fetch() {
        let mut state = AppState::new();
        let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);
        let client = test_client();

        process_message(
            &mut state,
            Message::Key(InputKey::CharCtrl('r')),
            &msg_tx,
            &client,
        );

        assert_eq!(state.load_state, LoadState::Loading);
        assert_eq!(state.fetch_generation, 1);

        // The endpoint is unreachable, so the spawned task reports failure
        let resolution = msg_rx.recv().await.expect("fetch task must report back");
        match resolution {
            Message::ProductsFetchFailed { generation, .. } => assert_eq!(generation, 1),
            other => panic!("expected fetch failure, got {other:?}"),
        }
    }
}
