use serde::Serialize;

use super::message::{Message, MessageId};

/// A viewer-specific thread with one counterpart, derived from the current
/// message snapshot on every aggregation pass and never persisted.
///
/// `messages` is ordered ascending by `(created_at, id)`; `last_message`
/// is the maximum under that ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversation {
    pub counterpart_id: String,
    pub counterpart_name: String,
    pub messages: Vec<Message>,
    pub last_message: Message,
    pub unread_count: usize,
}

impl Conversation {
    /// Identifiers of messages eligible for a mark-read call: addressed to
    /// the viewer and not yet acknowledged. Read state is never changed
    /// locally; the backend confirms it on the next fetch.
    pub fn unread_message_ids(&self, viewer_id: &str) -> Vec<MessageId> {
        self.messages
            .iter()
            .filter(|message| message.is_unread_for(viewer_id))
            .map(|message| message.id)
            .collect()
    }
}
