use validator::{ValidationErrors, ValidationErrorsKind};

use super::app_error::{AppError, ValidationIssue};
use crate::domain::DomainError;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            return AppError::Network(err.to_string());
        }

        if let Some(status) = err.status() {
            return match status.as_u16() {
                401 => AppError::Unauthorized,
                403 => AppError::Forbidden("request rejected by the backend".to_string()),
                404 => AppError::NotFound("resource not found".to_string()),
                429 => AppError::RateLimited,
                500..=599 => AppError::ServiceUnavailable {
                    service: "lms-api".to_string(),
                    message: "Backend temporarily unavailable. Please try again later."
                        .to_string(),
                },
                _ => AppError::Network(err.to_string()),
            };
        }

        if err.is_decode() {
            return AppError::InternalError(anyhow::anyhow!(
                "failed to decode backend response: {err}"
            ));
        }

        AppError::Network(err.to_string())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_validation_issues(None, &err, &mut issues);
        issues.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then(left.code.cmp(&right.code))
        });

        let message = match issues.as_slice() {
            [issue] => issue.message.clone(),
            _ => "Request validation failed".to_string(),
        };

        AppError::ValidationError { message, issues }
    }
}

fn collect_validation_issues(
    prefix: Option<String>,
    errors: &ValidationErrors,
    out: &mut Vec<ValidationIssue>,
) {
    for (field, kind) in errors.errors() {
        let path = match &prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(std::borrow::Cow::to_string)
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(ValidationIssue {
                        field: path.clone(),
                        message,
                        code: error.code.to_string(),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_validation_issues(Some(path), nested, out);
            }
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect_validation_issues(Some(format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}
