//! Key event handlers
//!
//! The search input is always focused, so printable characters edit the
//! query and everything else is a chord or navigation key.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Translate a key press into a message.
///
/// Returns None for keys that have no binding.
pub(crate) fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => Some(Message::Quit),

        InputKey::CharCtrl('r') | InputKey::F(5) => Some(Message::Reload),

        // Esc clears an active query; with nothing to clear it quits
        InputKey::Esc => {
            if state.search.is_empty() {
                Some(Message::Quit)
            } else {
                Some(Message::QueryClear)
            }
        }

        InputKey::Backspace => Some(Message::QueryPop),

        InputKey::Up => Some(Message::SelectUp),
        InputKey::Down => Some(Message::SelectDown),
        InputKey::PageUp => Some(Message::SelectPageUp),
        InputKey::PageDown => Some(Message::SelectPageDown),
        InputKey::Home => Some(Message::SelectFirst),
        InputKey::End => Some(Message::SelectLast),

        InputKey::Char(c) => Some(Message::QueryPush(c)),

        _ => None,
    }
}
