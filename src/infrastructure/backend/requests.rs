use serde::Serialize;

/// Request body for `POST /messages`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageBody {
    pub receiver_id: String,
    pub content: String,
}

impl SendMessageBody {
    pub fn new(receiver_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            receiver_id: receiver_id.into(),
            content: content.into(),
        }
    }
}
