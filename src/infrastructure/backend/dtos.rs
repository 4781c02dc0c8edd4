use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{DomainError, Message, MessageId};
use crate::error::AppError;

/// One message as returned by `GET /messages`.
///
/// Every field the viewer needs is optional on the wire: a malformed entry
/// is excluded from aggregation instead of failing the whole snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    #[serde(default)]
    pub id: Option<MessageId>,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub receiver_id: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub read: bool,
}

impl MessageRecord {
    /// Validate the wire record into a domain message. Missing required
    /// fields and unparsable timestamps are errors the caller excludes.
    pub fn to_message(&self) -> Result<Message, DomainError> {
        let id = self.id.ok_or(DomainError::MissingField("id"))?;
        let sender_id = self
            .sender_id
            .clone()
            .ok_or(DomainError::MissingField("senderId"))?;
        let receiver_id = self
            .receiver_id
            .clone()
            .ok_or(DomainError::MissingField("receiverId"))?;
        let content = self
            .content
            .clone()
            .ok_or(DomainError::MissingField("content"))?;
        let created_at_raw = self
            .created_at
            .as_deref()
            .ok_or(DomainError::MissingField("createdAt"))?;
        let created_at = DateTime::parse_from_rfc3339(created_at_raw)
            .map_err(|_| DomainError::InvalidTimestamp(created_at_raw.to_string()))?
            .with_timezone(&Utc);

        Ok(Message {
            id,
            sender_id,
            receiver_id,
            sender_name: self.sender_name.clone(),
            receiver_name: self.receiver_name.clone(),
            content,
            created_at,
            read: self.read,
        })
    }
}

/// Error envelope the backend returns on non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: String,
}

impl ApiErrorResponse {
    /// Maps backend error codes to AppError variants.
    pub fn to_app_error(&self) -> AppError {
        error!(
            code = %self.code,
            message = %self.message,
            "LMS API error"
        );

        match self.code.as_str() {
            "TOKEN_EXPIRED" => AppError::TokenExpired,
            "UNAUTHORIZED" | "INVALID_TOKEN" => AppError::Unauthorized,
            "FORBIDDEN" => AppError::Forbidden(self.message.clone()),
            "NOT_FOUND" => AppError::NotFound(self.message.clone()),
            "VALIDATION_ERROR" | "BAD_REQUEST" => AppError::BadRequest(self.message.clone()),
            "RATE_LIMITED" => AppError::RateLimited,
            "SERVICE_UNAVAILABLE" => AppError::ServiceUnavailable {
                service: "lms-api".to_string(),
                message: self.message.clone(),
            },
            _ => AppError::InternalError(anyhow::anyhow!("backend error: {}", self.message)),
        }
    }
}
