pub mod auth;
pub mod client;
pub mod dtos;
pub mod requests;
pub mod traits;


pub use auth::AuthContext;
pub use client::HttpLmsApiClient;
pub use dtos::{ApiErrorResponse, MessageRecord};
pub use requests::SendMessageBody;
pub use traits::LmsApiClient;
