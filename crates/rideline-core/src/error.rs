//! # Error Types
//!
//! Domain-specific error types for rideline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rideline-core errors (this file)                                      │
//! │  ├── BookingError     - Booking date-range check failures              │
//! │  └── ValidationError  - Car/review/registration input failures         │
//! │                                                                         │
//! │  rideline-api errors (separate crate)                                  │
//! │  └── ApiError         - HTTP transport and backend rejections          │
//! │                                                                         │
//! │  Terminal app errors                                                   │
//! │  └── AppError         - What the shell surfaces (code + message)       │
//! │                                                                         │
//! │  Flow: ValidationError → AppError → rendered message                   │
//! │        BookingError   → AppError → rendered message                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Booking Error
// =============================================================================

/// Failures of the booking date-range check.
///
/// The caller is responsible for surfacing the message and re-opening the
/// form; nothing here touches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// One or more of the four date/time inputs is empty.
    #[error("All pickup and return fields are required")]
    IncompleteFields,

    /// A non-empty input failed to parse as a date or time.
    ///
    /// Rejected out loud; a silent pass here would submit a booking the
    /// backend cannot interpret.
    #[error("Unreadable date or time: {0}")]
    MalformedDateTime(String),

    /// Return instant is not strictly after the pickup instant.
    #[error("Return date/time must be after the pickup date/time")]
    InvalidRange,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation failures for cars, reviews and registration.
///
/// These block submission client-side; the backend re-checks on its end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A field does not match the expected shape.
    #[error("{field}: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// A car with the same model and year already exists.
    #[error("Car with the same model and year already exists: {model} ({year})")]
    DuplicateCar { model: String, year: i32 },

    /// Rating outside the allowed 1..=5 range.
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
