//! # Validation Module
//!
//! Input validation for booking, car and registration forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form input (terminal app / any shell)                        │
//! │  ├── Field presence, immediate user feedback                           │
//! │  │                                                                      │
//! │  ▼                                                                      │
//! │  Layer 2: THIS MODULE - business rule validation (pure)                │
//! │  ├── Booking date-range ordering                                       │
//! │  ├── Car make/model character rules                                    │
//! │  └── Rating bounds, registration email shape                           │
//! │  │                                                                      │
//! │  ▼                                                                      │
//! │  Layer 3: REST backend (re-checks everything server-side)              │
//! │                                                                         │
//! │  A validation failure here blocks submission: no network call is       │
//! │  made for input this module rejects.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{BookingError, ValidationError, ValidationResult};
use crate::types::{Car, CarDraft};
use crate::{RENTAL_CLOSE_HOUR, RENTAL_OPEN_HOUR};

// =============================================================================
// Booking Date-Range Check
// =============================================================================

/// Validates a proposed booking interval.
///
/// ## Contract
/// - `IncompleteFields` when any of the four inputs is empty.
/// - `MalformedDateTime` when a non-empty input does not parse.
/// - `InvalidRange` when the return instant is not STRICTLY after the
///   pickup instant. Equal instants fail; a same-day later time passes.
///
/// Datetimes are constructed naively from the form strings. No timezone
/// normalization happens on either side of the wire; behavior across DST
/// boundaries or differing client/server timezones is undefined.
///
/// ## Example
/// ```rust
/// use rideline_core::validation::validate_booking;
/// use rideline_core::BookingError;
///
/// assert!(validate_booking("2024-05-01", "09:00", "2024-05-01", "09:01").is_ok());
/// assert_eq!(
///     validate_booking("2024-05-01", "09:00", "2024-05-01", "09:00"),
///     Err(BookingError::InvalidRange),
/// );
/// ```
pub fn validate_booking(
    pickup_date: &str,
    pickup_time: &str,
    return_date: &str,
    return_time: &str,
) -> Result<(), BookingError> {
    let fields = [pickup_date, pickup_time, return_date, return_time];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(BookingError::IncompleteFields);
    }

    let pickup = combine(pickup_date, pickup_time)?;
    let ret = combine(return_date, return_time)?;

    if ret <= pickup {
        return Err(BookingError::InvalidRange);
    }

    Ok(())
}

/// Combines a `YYYY-MM-DD` date and an `HH:MM` time into a naive datetime.
///
/// Accepts `HH:MM:SS` as well, since stored bookings sometimes carry
/// seconds. Malformed input is an explicit error, never a silent pass.
pub fn combine(date: &str, time: &str) -> Result<NaiveDateTime, BookingError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::MalformedDateTime(date.trim().to_string()))?;
    let time = parse_time(time.trim())?;
    Ok(NaiveDateTime::new(date, time))
}

fn parse_time(time: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| BookingError::MalformedDateTime(time.to_string()))
}

/// The selectable pickup/return hours, `09:00` through `17:00` on the hour.
///
/// The booking form offers exactly these slots; anything else arrives only
/// through hand-crafted requests and is the backend's problem.
pub fn rental_time_slots() -> Vec<String> {
    (RENTAL_OPEN_HOUR..=RENTAL_CLOSE_HOUR)
        .map(|hour| format!("{hour:02}:00"))
        .collect()
}

// =============================================================================
// Car Validators
// =============================================================================

/// Validates a car make.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain digits
/// - Must start with an uppercase letter
/// - Remainder may contain only letters, spaces, or hyphens
pub fn validate_make(make: &str) -> ValidationResult<()> {
    let make = make.trim();

    if make.is_empty() {
        return Err(ValidationError::Required { field: "make" });
    }

    if make.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "make",
            reason: "cannot contain numbers",
        });
    }

    let mut chars = make.chars();
    let first = chars.next().unwrap_or(' ');
    if !first.is_uppercase() || !chars.all(|c| c.is_alphabetic() || c == ' ' || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "make",
            reason: "must start with an uppercase letter and contain only letters, spaces, or hyphens",
        });
    }

    Ok(())
}

/// Validates a car model.
///
/// ## Rules
/// - Must not be empty
/// - Must start with a letter
/// - Remainder may contain letters, digits, spaces, or hyphens
pub fn validate_model(model: &str) -> ValidationResult<()> {
    let model = model.trim();

    if model.is_empty() {
        return Err(ValidationError::Required { field: "model" });
    }

    let mut chars = model.chars();
    let first = chars.next().unwrap_or(' ');
    if !first.is_alphabetic() || !chars.all(|c| c.is_alphanumeric() || c == ' ' || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "model",
            reason: "must start with a letter and can contain letters, numbers, spaces, or hyphens",
        });
    }

    Ok(())
}

/// Validates a full car draft against the known catalog.
///
/// Runs the make/model rules, then the duplicate guard: `(model, year)`
/// must be unique among `known`, excluding `editing_id` when the draft is
/// an edit of an existing car. The backend applies the same rule, but
/// catching it here keeps the round-trip out of the happy path.
pub fn validate_car(
    draft: &CarDraft,
    known: &[Car],
    editing_id: Option<i64>,
) -> ValidationResult<()> {
    validate_make(&draft.make)?;
    validate_model(&draft.model)?;

    for car in known {
        if Some(car.id) == editing_id {
            continue;
        }
        if car.model == draft.model && car.year == draft.year {
            return Err(ValidationError::DuplicateCar {
                model: draft.model.clone(),
                year: draft.year,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Review & Registration Validators
// =============================================================================

/// Validates a review rating (1..=5 inclusive).
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(ValidationError::RatingOutOfRange(rating));
    }
    Ok(())
}

/// Validates a registration username, which must look like an email.
///
/// ## Rules
/// - Non-empty local part of alphanumerics plus `. _ % + -`
/// - Exactly one `@`
/// - Dotted domain of alphanumerics, dots and hyphens
/// - Alphabetic TLD of length >= 2
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required { field: "username" });
    }

    let invalid = ValidationError::InvalidFormat {
        field: "username",
        reason: "must be a valid email address",
    };

    let (local, domain) = match username.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid),
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));

    let (host, tld) = match domain.rsplit_once('.') {
        Some(parts) => parts,
        None => return Err(invalid),
    };
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    if !(local_ok && host_ok && tld_ok) {
        return Err(invalid);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, model: &str, year: i32) -> Car {
        Car {
            id,
            make: "Seat".into(),
            model: model.into(),
            year,
            features: vec![],
        }
    }

    #[test]
    fn test_booking_equal_instants_fail() {
        assert_eq!(
            validate_booking("2024-05-01", "09:00", "2024-05-01", "09:00"),
            Err(BookingError::InvalidRange)
        );
    }

    #[test]
    fn test_booking_same_day_later_time_passes() {
        assert!(validate_booking("2024-05-01", "09:00", "2024-05-01", "09:01").is_ok());
    }

    #[test]
    fn test_booking_return_before_pickup_fails() {
        assert_eq!(
            validate_booking("2024-05-02", "09:00", "2024-05-01", "17:00"),
            Err(BookingError::InvalidRange)
        );
    }

    #[test]
    fn test_booking_empty_field_fails_before_parsing() {
        assert_eq!(
            validate_booking("2024-05-01", "", "2024-05-02", "10:00"),
            Err(BookingError::IncompleteFields)
        );
        assert_eq!(
            validate_booking("   ", "09:00", "2024-05-02", "10:00"),
            Err(BookingError::IncompleteFields)
        );
    }

    #[test]
    fn test_booking_malformed_input_is_rejected() {
        let err = validate_booking("garbage", "09:00", "2024-05-02", "10:00");
        assert!(matches!(err, Err(BookingError::MalformedDateTime(_))));
    }

    #[test]
    fn test_combine_accepts_seconds() {
        let dt = combine("2024-05-01", "09:00:00").unwrap();
        assert_eq!(dt, combine("2024-05-01", "09:00").unwrap());
    }

    #[test]
    fn test_rental_time_slots_cover_business_hours() {
        let slots = rental_time_slots();
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:00"));
        assert_eq!(slots.len(), 9);
    }

    #[test]
    fn test_make_rules() {
        assert!(validate_make("Seat").is_ok());
        assert!(validate_make("Alfa Romeo").is_ok());
        assert!(validate_make("Mercedes-Benz").is_ok());
        assert!(validate_make("").is_err());
        assert!(validate_make("seat").is_err());
        assert!(validate_make("Seat3").is_err());
    }

    #[test]
    fn test_model_rules() {
        assert!(validate_model("Ibiza").is_ok());
        assert!(validate_model("A4").is_ok());
        assert!(validate_model("4Runner").is_err());
        assert!(validate_model("").is_err());
    }

    #[test]
    fn test_duplicate_model_year_guard() {
        let known = vec![car(1, "Ibiza", 2021), car(2, "Leon", 2022)];
        let draft = CarDraft::from_form("Seat", "Ibiza", 2021, "");

        assert_eq!(
            validate_car(&draft, &known, None),
            Err(ValidationError::DuplicateCar {
                model: "Ibiza".into(),
                year: 2021
            })
        );
        // Editing the existing car itself is allowed.
        assert!(validate_car(&draft, &known, Some(1)).is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        for r in 1..=5u8 {
            assert!(validate_rating(r).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_username_email_shape() {
        assert!(validate_username("yu@yu.com").is_ok());
        assert!(validate_username("first.last+tag@sub.example.org").is_ok());
        assert!(validate_username("not-an-email").is_err());
        assert!(validate_username("user@domain").is_err());
        assert!(validate_username("user@domain.c").is_err());
        assert!(validate_username("").is_err());
    }
}
