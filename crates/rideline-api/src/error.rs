//! # API Error Types
//!
//! Error types for REST round-trips.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │  Authorization  │  │     Backend             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Unauthorized   │  │  Rejected (other 4xx/   │ │
//! │  │  (DNS, refused, │  │  (401)          │  │   5xx with the body's   │ │
//! │  │   timeout)      │  │  Forbidden      │  │   error message)        │ │
//! │  │                 │  │  (403)          │  │  NotFound (404)         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  None of these retries automatically; callers log and surface the      │
//! │  message.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the rental backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: DNS, connection refused, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 401: missing or rejected credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 403: authenticated but not allowed (admin-only surface).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 404: the resource does not exist (deleted car, unknown booking).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx. Carries the backend's `error` message when the
    /// body had one, else the raw status.
    #[error("Backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The body did not parse as the expected shape.
    #[error("Unreadable response: {0}")]
    Decode(String),

    /// Bad base URL or path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Maps a non-2xx status plus the best available message to a variant.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Rejected { status, message },
        }
    }

    /// True for 401/403, the category modals treat as "sign in again".
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::Forbidden(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(401, "no token".into()),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from_status(403, "admins only".into()),
            ApiError::Forbidden(_)
        ));
        assert!(matches!(
            ApiError::from_status(404, "gone".into()),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from_status(400, "bad make".into()),
            ApiError::Rejected { status: 400, .. }
        ));
    }

    #[test]
    fn test_auth_category() {
        assert!(ApiError::from_status(401, String::new()).is_auth());
        assert!(ApiError::from_status(403, String::new()).is_auth());
        assert!(!ApiError::from_status(500, String::new()).is_auth());
    }
}
