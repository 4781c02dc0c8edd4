use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::{Conversation, Message};
use crate::infrastructure::backend::MessageRecord;

/// Transform the flat message snapshot into one thread per counterpart,
/// ordered by recency.
///
/// Pure and idempotent: invoked with the full snapshot on every poll tick,
/// never with a partial merge. Output order does not depend on input
/// order; the final list is re-sorted wholesale because any message can
/// become any conversation's latest after a refresh.
///
/// Malformed records are excluded with a warning rather than failing the
/// pass, and messages not involving the viewer are skipped.
pub fn aggregate(records: &[MessageRecord], viewer_id: &str) -> Vec<Conversation> {
    // Group in first-seen order; a plain HashMap only serves as the index
    // so nothing depends on its iteration order.
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Message>)> = Vec::new();

    for record in records {
        let message = match record.to_message() {
            Ok(message) => message,
            Err(reason) => {
                warn!(%reason, "excluding malformed message from aggregation");
                continue;
            }
        };

        let Some(counterpart) = message.counterpart_of(viewer_id) else {
            debug!(
                message_id = message.id,
                "skipping message that does not involve the viewer"
            );
            continue;
        };
        let counterpart = counterpart.to_string();

        match group_index.get(&counterpart) {
            Some(&index) => groups[index].1.push(message),
            None => {
                group_index.insert(counterpart.clone(), groups.len());
                groups.push((counterpart, vec![message]));
            }
        }
    }

    let mut conversations: Vec<Conversation> = groups
        .into_iter()
        .filter_map(|(counterpart_id, mut messages)| {
            messages.sort_by(|a, b| a.recency_key().cmp(&b.recency_key()));

            let last_message = messages.last()?.clone();
            let unread_count = messages
                .iter()
                .filter(|message| message.is_unread_for(viewer_id))
                .count();
            let counterpart_name = messages
                .iter()
                .rev()
                .find_map(|message| message.counterpart_name_for(viewer_id))
                .map(str::to_string)
                .unwrap_or_else(|| counterpart_id.clone());

            Some(Conversation {
                counterpart_id,
                counterpart_name,
                messages,
                last_message,
                unread_count,
            })
        })
        .collect();

    conversations.sort_by(|a, b| {
        b.last_message
            .recency_key()
            .cmp(&a.last_message.recency_key())
    });

    conversations
}
