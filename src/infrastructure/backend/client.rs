use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use tracing::error;

use super::auth::AuthContext;
use super::dtos::{ApiErrorResponse, MessageRecord};
use super::requests::SendMessageBody;
use super::traits::LmsApiClient;
use crate::config::ApiConfig;
use crate::domain::MessageId;
use crate::error::{AppError, AppResult};

/// HTTP client for the LMS backend messaging endpoints.
pub struct HttpLmsApiClient {
    config: ApiConfig,
    auth: AuthContext,
    client: Client,
}

impl HttpLmsApiClient {
    /// Create a new client.
    ///
    /// `auth` carries the bearer token for the authenticated viewer; it is
    /// attached to every request and never read from ambient storage.
    pub fn new(config: ApiConfig, auth: AuthContext) -> AppResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "API base URL not configured"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::InternalError(anyhow::anyhow!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            auth,
            client,
        })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub(crate) fn messages_url(&self) -> String {
        format!("{}/messages", self.base_url())
    }

    pub(crate) fn mark_read_url(&self, message_id: MessageId) -> String {
        format!("{}/messages/{}/read", self.base_url(), message_id)
    }

    pub(crate) async fn handle_error(&self, response: reqwest::Response) -> AppError {
        let status = response.status();

        // Try to parse the error envelope
        match response.json::<ApiErrorResponse>().await {
            Ok(envelope) => envelope.to_app_error(),
            Err(_) => {
                error!(
                    status = %status,
                    "LMS API request failed with unparsable error"
                );
                match status.as_u16() {
                    401 => AppError::Unauthorized,
                    403 => AppError::Forbidden("request rejected by the backend".to_string()),
                    404 => AppError::NotFound("resource not found".to_string()),
                    429 => AppError::RateLimited,
                    500..=599 => AppError::ServiceUnavailable {
                        service: "lms-api".to_string(),
                        message: "Backend temporarily unavailable. Please try again later."
                            .to_string(),
                    },
                    _ => AppError::BadRequest("Invalid request".to_string()),
                }
            }
        }
    }
}

#[async_trait]
impl LmsApiClient for HttpLmsApiClient {
    async fn list_messages(&self) -> AppResult<Vec<MessageRecord>> {
        let response = self
            .client
            .get(self.messages_url())
            .header(AUTHORIZATION, self.auth.bearer())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    url = %self.messages_url(),
                    "failed to fetch message snapshot"
                );
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        response.json::<Vec<MessageRecord>>().await.map_err(|e| {
            error!(error = %e, "failed to parse message snapshot");
            AppError::InternalError(anyhow::anyhow!("failed to parse message snapshot: {}", e))
        })
    }

    async fn send_message(&self, body: SendMessageBody) -> AppResult<MessageRecord> {
        let response = self
            .client
            .post(self.messages_url())
            .header(AUTHORIZATION, self.auth.bearer())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    url = %self.messages_url(),
                    "failed to send message"
                );
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        response.json::<MessageRecord>().await.map_err(|e| {
            error!(error = %e, "failed to parse created message");
            AppError::InternalError(anyhow::anyhow!("failed to parse created message: {}", e))
        })
    }

    async fn mark_read(&self, message_id: MessageId) -> AppResult<()> {
        let url = self.mark_read_url(message_id);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth.bearer())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "failed to mark message read");
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            return Err(self.handle_error(response).await);
        }

        Ok(())
    }
}
