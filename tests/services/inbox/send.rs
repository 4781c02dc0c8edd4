use messaging_client::application::SendMessageRequest;
use messaging_client::error::AppError;
use tokio::test;

use super::helpers::{service_with, VIEWER};
use crate::common::fixtures::sample_snapshot;

#[test]
async fn send_message_validates_content_length() {
    let (_, service) = service_with(vec![]);

    let empty = SendMessageRequest {
        receiver_id: "9".to_string(),
        content: String::new(),
    };
    let result = service.send_message(empty).await;
    assert!(matches!(result, Err(AppError::ValidationError { .. })));

    let long = SendMessageRequest {
        receiver_id: "9".to_string(),
        content: "x".repeat(5001),
    };
    let long_result = service.send_message(long).await;
    assert!(matches!(long_result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn send_message_requires_a_receiver() {
    let (_, service) = service_with(vec![]);

    let request = SendMessageRequest {
        receiver_id: String::new(),
        content: "hello".to_string(),
    };

    let result = service.send_message(request).await;
    assert!(matches!(result, Err(AppError::ValidationError { .. })));
}

#[test]
async fn sent_message_appears_in_the_thread_on_the_next_refresh() {
    let (_, service) = service_with(sample_snapshot());

    let request = SendMessageRequest {
        receiver_id: "9".to_string(),
        content: "are you around?".to_string(),
    };
    let created = service.send_message(request).await.unwrap();
    assert_eq!(created.sender_id, VIEWER);
    assert_eq!(created.receiver_id, "9");

    let conversations = service.refresh(VIEWER).await.unwrap();
    let with_nine = conversations
        .iter()
        .find(|conversation| conversation.counterpart_id == "9")
        .unwrap();

    assert_eq!(with_nine.last_message.id, created.id);
    assert_eq!(with_nine.last_message.content, "are you around?");
    // A message the viewer sent never contributes to their unread count.
    assert_eq!(with_nine.unread_count, 1);
}

#[test]
async fn boundary_content_length_is_accepted() {
    let (_, service) = service_with(vec![]);

    let request = SendMessageRequest {
        receiver_id: "9".to_string(),
        content: "x".repeat(5000),
    };

    assert!(service.send_message(request).await.is_ok());
}
