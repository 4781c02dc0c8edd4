use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Too many requests")]
    RateLimited,

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error")]
    InternalError(#[source] anyhow::Error),
}

impl AppError {
    /// Stable label for structured log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::TokenExpired => "TOKEN_EXPIRED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::RateLimited => "RATE_LIMITED",
            AppError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Transient conditions the poll loop simply retries on the next tick,
    /// leaving the last good snapshot in place.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::RateLimited | AppError::ServiceUnavailable { .. }
        )
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    /// Message safe to surface as a non-fatal notification. Internal
    /// details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InternalError(_) => "Something went wrong".to_string(),
            AppError::NotFound(message)
            | AppError::Forbidden(message)
            | AppError::BadRequest(message) => message.clone(),
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::Unauthorized => "Unauthorized".to_string(),
            AppError::TokenExpired => "Session expired, please sign in again".to_string(),
            AppError::RateLimited => "Too many requests".to_string(),
            AppError::ServiceUnavailable { message, .. } => message.clone(),
            AppError::Network(_) => "Connection problem, retrying shortly".to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
