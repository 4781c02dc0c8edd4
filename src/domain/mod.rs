pub mod conversation;
pub mod errors;
pub mod message;

pub use conversation::Conversation;
pub use errors::DomainError;
pub use message::{Message, MessageId};
