use std::sync::Arc;

use tracing::warn;
use validator::Validate;

use super::inbox::aggregate;
use crate::domain::{Conversation, Message};
use crate::error::AppResult;
use crate::infrastructure::backend::{LmsApiClient, SendMessageBody};

#[derive(Debug, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "receiver is required"))]
    pub receiver_id: String,
    #[validate(length(min = 1, max = 5000))]
    pub content: String,
}

#[derive(Clone)]
pub struct InboxService {
    api: Arc<dyn LmsApiClient>,
}

impl InboxService {
    pub fn new(api: Arc<dyn LmsApiClient>) -> Self {
        Self { api }
    }

    /// Fetch the full message snapshot and aggregate it into threads.
    ///
    /// On error the caller keeps its previous result; there is no partial
    /// merge mode.
    pub async fn refresh(&self, viewer_id: &str) -> AppResult<Vec<Conversation>> {
        let records = self.api.list_messages().await?;
        Ok(aggregate(&records, viewer_id))
    }

    /// Send one message; the created message is returned so the caller
    /// can insert it optimistically ahead of the next poll.
    pub async fn send_message(&self, request: SendMessageRequest) -> AppResult<Message> {
        request.validate()?;

        let created = self
            .api
            .send_message(SendMessageBody::new(request.receiver_id, request.content))
            .await?;

        Ok(created.to_message()?)
    }

    /// Mark every unread message addressed to the viewer within one
    /// conversation.
    ///
    /// One idempotent call per message, fire-and-forget: a failed call is
    /// logged and skipped, never retried here, and read state is never
    /// patched locally. The next successful poll reconciles whatever
    /// subset actually landed. Returns the number of messages marked.
    pub async fn mark_conversation_read(
        &self,
        conversation: &Conversation,
        viewer_id: &str,
    ) -> usize {
        let mut marked = 0;

        for message_id in conversation.unread_message_ids(viewer_id) {
            match self.api.mark_read(message_id).await {
                Ok(()) => marked += 1,
                Err(error) => warn!(
                    message_id,
                    counterpart_id = %conversation.counterpart_id,
                    code = error.error_code(),
                    error = %error,
                    "mark-read failed; read state reconciles on the next poll"
                ),
            }
        }

        marked
    }
}
