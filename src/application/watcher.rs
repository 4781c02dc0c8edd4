use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use super::inbox::select_after_refresh;
use super::inbox_service::InboxService;
use crate::domain::Conversation;
use crate::error::AppResult;

/// Fixed-interval inbox refresh with last-known-good retention.
///
/// Each poll is an independent idempotent read of the full snapshot; a
/// failed poll leaves the previous aggregation on display and the next
/// tick simply tries again. Polls run sequentially inside this task, so a
/// stale response can never overwrite a fresher one.
pub struct InboxWatcher {
    service: InboxService,
    viewer_id: String,
    interval: Duration,
    conversations: Vec<Conversation>,
    selected_counterpart_id: Option<String>,
}

impl InboxWatcher {
    pub fn new(service: InboxService, viewer_id: impl Into<String>, interval: Duration) -> Self {
        Self {
            service,
            viewer_id: viewer_id.into(),
            interval,
            conversations: Vec::new(),
            selected_counterpart_id: None,
        }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        let selected = self.selected_counterpart_id.as_deref()?;
        self.conversations
            .iter()
            .find(|conversation| conversation.counterpart_id == selected)
    }

    /// User-driven selection of the active thread, by stable key.
    pub fn select(&mut self, counterpart_id: impl Into<String>) {
        self.selected_counterpart_id = Some(counterpart_id.into());
    }

    /// One poll tick: on success the snapshot is replaced wholesale and
    /// the selection policy re-applied; on failure state is untouched.
    pub async fn tick(&mut self) -> AppResult<()> {
        let conversations = self.service.refresh(&self.viewer_id).await?;

        self.selected_counterpart_id =
            select_after_refresh(self.selected_counterpart_id.as_deref(), &conversations)
                .map(|conversation| conversation.counterpart_id.clone());
        self.conversations = conversations;

        Ok(())
    }

    pub async fn run(mut self) {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match self.tick().await {
                Ok(()) => {
                    let unread: usize = self
                        .conversations
                        .iter()
                        .map(|conversation| conversation.unread_count)
                        .sum();
                    info!(
                        conversations = self.conversations.len(),
                        unread,
                        selected = ?self.selected_counterpart_id,
                        "inbox refreshed"
                    );
                }
                Err(error) => warn!(
                    code = error.error_code(),
                    retryable = error.is_retryable(),
                    error = %error,
                    "inbox refresh failed; keeping last snapshot"
                ),
            }
        }
    }
}
