#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use messaging_client::domain::MessageId;
use messaging_client::error::{AppError, AppResult};
use messaging_client::infrastructure::backend::{LmsApiClient, MessageRecord, SendMessageBody};

/// In-memory stand-in for the LMS backend.
#[derive(Default)]
pub struct MockLmsApi {
    pub records: Mutex<Vec<MessageRecord>>,
    pub list_unavailable: Mutex<bool>,
    pub marked: Mutex<Vec<MessageId>>,
    pub failing_mark_ids: Mutex<HashSet<MessageId>>,
    pub next_id: Mutex<MessageId>,
}

impl MockLmsApi {
    pub fn with_records(records: Vec<MessageRecord>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            records: Mutex::new(records),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    pub fn set_records(&self, records: Vec<MessageRecord>) {
        *self.records.lock().expect("records mutex poisoned") = records;
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        *self
            .list_unavailable
            .lock()
            .expect("availability mutex poisoned") = unavailable;
    }

    pub fn fail_mark_read_for(&self, message_id: MessageId) {
        self.failing_mark_ids
            .lock()
            .expect("failing ids mutex poisoned")
            .insert(message_id);
    }

    pub fn marked_ids(&self) -> Vec<MessageId> {
        self.marked.lock().expect("marked mutex poisoned").clone()
    }
}

#[async_trait]
impl LmsApiClient for MockLmsApi {
    async fn list_messages(&self) -> AppResult<Vec<MessageRecord>> {
        if *self
            .list_unavailable
            .lock()
            .expect("availability mutex poisoned")
        {
            return Err(AppError::ServiceUnavailable {
                service: "lms-api".to_string(),
                message: "upstream timeout".to_string(),
            });
        }
        Ok(self
            .records
            .lock()
            .expect("records mutex poisoned")
            .clone())
    }

    async fn send_message(&self, body: SendMessageBody) -> AppResult<MessageRecord> {
        let mut next_id = self.next_id.lock().expect("id mutex poisoned");
        let id = *next_id;
        *next_id += 1;
        drop(next_id);

        let record = MessageRecord {
            id: Some(id),
            sender_id: Some("7".to_string()),
            receiver_id: Some(body.receiver_id.clone()),
            sender_name: Some("User 7".to_string()),
            receiver_name: Some(format!("User {}", body.receiver_id)),
            content: Some(body.content.clone()),
            created_at: Some(Utc::now().to_rfc3339()),
            read: false,
        };

        self.records
            .lock()
            .expect("records mutex poisoned")
            .push(record.clone());
        Ok(record)
    }

    async fn mark_read(&self, message_id: MessageId) -> AppResult<()> {
        if self
            .failing_mark_ids
            .lock()
            .expect("failing ids mutex poisoned")
            .contains(&message_id)
        {
            return Err(AppError::ServiceUnavailable {
                service: "lms-api".to_string(),
                message: "upstream timeout".to_string(),
            });
        }

        let mut records = self.records.lock().expect("records mutex poisoned");
        if let Some(record) = records.iter_mut().find(|r| r.id == Some(message_id)) {
            record.read = true;
        }
        drop(records);

        self.marked
            .lock()
            .expect("marked mutex poisoned")
            .push(message_id);
        Ok(())
    }
}
