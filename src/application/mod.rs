pub mod inbox;
pub mod inbox_service;
pub mod watcher;

pub use inbox_service::{InboxService, SendMessageRequest};
pub use watcher::InboxWatcher;
