use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type MessageId = u64;

/// A single directed message between the viewer and one other participant.
///
/// `read` is only meaningful from the receiver's perspective; a sender
/// never evaluates the unread status of their own messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: String,
    pub receiver_id: String,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    /// The other participant relative to `viewer_id`, or `None` when the
    /// viewer is not a participant of this message at all.
    pub fn counterpart_of(&self, viewer_id: &str) -> Option<&str> {
        if self.sender_id == viewer_id {
            Some(self.receiver_id.as_str())
        } else if self.receiver_id == viewer_id {
            Some(self.sender_id.as_str())
        } else {
            None
        }
    }

    /// Display name of the counterpart, when this message carries one.
    pub fn counterpart_name_for(&self, viewer_id: &str) -> Option<&str> {
        if self.sender_id == viewer_id {
            self.receiver_name.as_deref()
        } else if self.receiver_id == viewer_id {
            self.sender_name.as_deref()
        } else {
            None
        }
    }

    /// Unread from the viewer's perspective: the viewer is the receiver
    /// and the message has not been acknowledged.
    pub fn is_unread_for(&self, viewer_id: &str) -> bool {
        self.receiver_id == viewer_id && !self.read
    }

    /// Total order used to pick the latest message: `created_at`, then
    /// `id` as a deterministic tiebreaker.
    pub fn recency_key(&self) -> (DateTime<Utc>, MessageId) {
        (self.created_at, self.id)
    }
}
