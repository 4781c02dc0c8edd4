mod app_error;
mod conversions;


pub use app_error::{AppError, AppResult, ValidationIssue};
