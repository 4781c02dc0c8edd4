use crate::domain::Conversation;

/// Re-selection policy applied after every refresh rebuilds the thread
/// list from scratch.
///
/// Selection is by stable counterpart key, never by list index: an
/// insertion or removal elsewhere in the list must not move the active
/// thread. A previously selected counterpart with no remaining messages
/// yields `None`; the caller renders a "no conversation selected" state.
pub fn select_after_refresh<'a>(
    previous_counterpart_id: Option<&str>,
    conversations: &'a [Conversation],
) -> Option<&'a Conversation> {
    match previous_counterpart_id {
        Some(previous) => conversations
            .iter()
            .find(|conversation| conversation.counterpart_id == previous),
        None => conversations.first(),
    }
}
