//! # App Error Type
//!
//! Unified error type for the application layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rideline                               │
//! │                                                                         │
//! │  Page / command                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ValidationError / BookingError ──► code VALIDATION   (blocks submit,  │
//! │       │                              nothing was sent)                 │
//! │       ▼                                                                 │
//! │  ApiError::Unauthorized ──────────► code UNAUTHENTICATED               │
//! │  ApiError::Forbidden ─────────────► code FORBIDDEN                     │
//! │  ApiError::NotFound ──────────────► code NOT_FOUND                     │
//! │  ApiError::Network ───────────────► code NETWORK                       │
//! │  ApiError::Rejected/Decode/... ───► code BACKEND                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError { code, message } ──► rendered to the user, never retried    │
//! │                                 automatically, never fatal             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use rideline_api::ApiError;
use rideline_core::{BookingError, ValidationError};

/// Application error surfaced to the user.
///
/// Carries a machine-readable code (what a UI would switch on) and the
/// human-readable message (what a modal would show).
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes for the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No session; the action needs a sign-in first.
    Unauthenticated,
    /// Signed in, but the backend requires the admin role.
    Forbidden,
    /// The referenced resource does not exist.
    NotFound,
    /// Client-side validation blocked the submission.
    Validation,
    /// The request never completed.
    Network,
    /// The backend rejected the request.
    Backend,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Unauthenticated, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Forbidden, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Validation, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Backend, message)
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Unauthorized(_) => ErrorCode::Unauthenticated,
            ApiError::Forbidden(_) => ErrorCode::Forbidden,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::Network(_) => ErrorCode::Network,
            _ => ErrorCode::Backend,
        };
        AppError::new(code, err.to_string())
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_codes() {
        let err: AppError = ApiError::Unauthorized("no token".into()).into();
        assert_eq!(err.code, ErrorCode::Unauthenticated);

        let err: AppError = ApiError::Forbidden("admins only".into()).into();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let err: AppError = ApiError::Rejected {
            status: 400,
            message: "bad make".into(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::Backend);
        assert!(err.message.contains("bad make"));
    }

    #[test]
    fn test_validation_errors_block_with_validation_code() {
        let err: AppError = BookingError::InvalidRange.into();
        assert_eq!(err.code, ErrorCode::Validation);

        let err: AppError = ValidationError::RatingOutOfRange(9).into();
        assert_eq!(err.code, ErrorCode::Validation);
    }
}
