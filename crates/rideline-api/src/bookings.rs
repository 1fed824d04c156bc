//! # Booking Endpoints
//!
//! Creating, listing and cancelling reservations. Every route here requires
//! the bearer token; `all` additionally requires the admin role, which the
//! backend enforces (403 otherwise).
//!
//! The backend rejects a booking for a car already reserved at the exact
//! same pickup instant and answers with a human-readable message; the
//! client surfaces that message verbatim rather than pre-checking overlap.

use serde::Deserialize;
use tracing::debug;

use rideline_core::{Booking, BookingDraft};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Outcome of a booking cancellation.
#[derive(Debug, Deserialize)]
pub struct BookingCancelled {
    #[serde(default)]
    pub message: String,
    pub booking: Booking,
}

/// Bookings endpoint group.
#[derive(Debug, Clone)]
pub struct BookingsApi {
    client: ApiClient,
}

impl BookingsApi {
    pub fn new(client: ApiClient) -> Self {
        BookingsApi { client }
    }

    /// Submits a booking. The caller runs the date-range check first; this
    /// call only happens for input that passed it.
    pub async fn create(&self, draft: &BookingDraft) -> ApiResult<Booking> {
        debug!(car_id = draft.car_id, date = %draft.date, "Creating booking");
        self.client.post("bookings", draft).await
    }

    /// The signed-in user's own bookings.
    pub async fn mine(&self) -> ApiResult<Vec<Booking>> {
        debug!("Fetching own bookings");
        self.client.get("user/bookings", &[]).await
    }

    /// Cancels one of the user's bookings.
    pub async fn cancel(&self, booking_id: i64) -> ApiResult<BookingCancelled> {
        debug!(booking_id, "Cancelling booking");
        self.client.delete(&format!("bookings/{booking_id}")).await
    }

    /// Every booking in the system (admin only).
    pub async fn all(&self) -> ApiResult<Vec<Booking>> {
        debug!("Fetching all bookings (admin)");
        self.client.get("admin/bookings", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_list_shape() {
        let json = r#"[{
            "id": 1, "user_id": "yu@yu.com", "car_id": 4,
            "date": "2024-05-01", "time": "09:00",
            "return_date": "2024-05-02", "return_time": "10:00",
            "created_at": "2024-04-30T18:22:00"
        }]"#;
        let bookings: Vec<Booking> = serde_json::from_str(json).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].car_id, 4);
        assert_eq!(bookings[0].time, "09:00");
    }
}
