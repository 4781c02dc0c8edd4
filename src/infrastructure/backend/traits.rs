use async_trait::async_trait;

use super::dtos::MessageRecord;
use super::requests::SendMessageBody;
use crate::domain::MessageId;
use crate::error::AppResult;

/// Trait for the backend messaging endpoints.
#[async_trait]
pub trait LmsApiClient: Send + Sync {
    /// Fetch the full flat message snapshot for the authenticated viewer.
    async fn list_messages(&self) -> AppResult<Vec<MessageRecord>>;

    /// Create one message; the created record is returned so the caller
    /// can insert it optimistically.
    async fn send_message(&self, body: SendMessageBody) -> AppResult<MessageRecord>;

    /// Mark one message read. Idempotent on the backend: marking an
    /// already-read message again is a no-op, not an error.
    async fn mark_read(&self, message_id: MessageId) -> AppResult<()>;
}
