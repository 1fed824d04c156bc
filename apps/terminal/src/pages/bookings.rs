//! # Booking Pages
//!
//! The user's own bookings, the admin's view of everyone's, and the two
//! booking mutations (create, cancel).
//!
//! ## Submission Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     submit_booking(draft)                               │
//! │                                                                         │
//! │  no session ───────────────► Unauthenticated, nothing sent             │
//! │  date-range check fails ───► Validation, nothing sent                  │
//! │  POST /bookings ───────────► backend may still refuse (e.g. the car    │
//! │                              is taken at that exact pickup instant);   │
//! │                              its message is surfaced verbatim          │
//! │                                                                         │
//! │  Overlapping-interval detection does NOT happen on either side; the    │
//! │  backend only rejects identical pickup instants.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::warn;

use rideline_api::{BookingsApi, CarsApi};
use rideline_core::validation::{combine, validate_booking};
use rideline_core::{Booking, BookingDraft, Car};

use crate::error::AppError;
use crate::state::SessionState;

// =============================================================================
// Sorting & Joining
// =============================================================================

/// Orders bookings newest pickup first. Unparseable rows sink to the end
/// rather than poisoning the sort.
pub fn sort_newest_first(bookings: &mut [Booking]) {
    let key = |b: &Booking| combine(&b.date, &b.time).ok();
    bookings.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Fetches the car behind each booking, once per distinct car. A car that
/// fails to load (deleted, for instance) just renders by id.
async fn join_cars(cars_api: &CarsApi, bookings: &[Booking]) -> HashMap<i64, Car> {
    let mut details = HashMap::new();
    for booking in bookings {
        if details.contains_key(&booking.car_id) {
            continue;
        }
        match cars_api.get(booking.car_id).await {
            Ok(car) => {
                details.insert(booking.car_id, car);
            }
            Err(e) => {
                warn!(car_id = booking.car_id, error = %e, "Could not load car for booking");
            }
        }
    }
    details
}

fn render_booking_line(out: &mut String, booking: &Booking, cars: &HashMap<i64, Car>) {
    let car_label = match cars.get(&booking.car_id) {
        Some(car) => format!("{} ({})", car.display_name(), car.year),
        None => format!("car #{}", booking.car_id),
    };
    let _ = writeln!(
        out,
        "  #{} {}: {} {} -> {} {}",
        booking.id, car_label, booking.date, booking.time, booking.return_date, booking.return_time
    );
}

// =============================================================================
// My Bookings
// =============================================================================

/// The signed-in user's bookings, newest first, with car details joined.
#[derive(Debug, Clone)]
pub struct MyBookingsPage {
    pub bookings: Vec<Booking>,
    pub cars: HashMap<i64, Car>,
}

impl MyBookingsPage {
    pub async fn load(
        bookings_api: &BookingsApi,
        cars_api: &CarsApi,
        session: &SessionState,
    ) -> Result<MyBookingsPage, AppError> {
        if !session.is_authenticated() {
            return Err(AppError::unauthenticated(
                "You must sign in to see your bookings",
            ));
        }

        let mut bookings = bookings_api.mine().await?;
        sort_newest_first(&mut bookings);
        let cars = join_cars(cars_api, &bookings).await;

        Ok(MyBookingsPage { bookings, cars })
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "My bookings ({})", self.bookings.len());
        for booking in &self.bookings {
            render_booking_line(&mut out, booking, &self.cars);
        }
        if self.bookings.is_empty() {
            let _ = writeln!(out, "  (no bookings)");
        }
        out
    }
}

// =============================================================================
// Admin Bookings
// =============================================================================

/// Every booking in the system. The admin gate runs client-side first so a
/// non-admin never issues the request; the backend enforces it anyway.
#[derive(Debug, Clone)]
pub struct AdminBookingsPage {
    pub bookings: Vec<Booking>,
    pub cars: HashMap<i64, Car>,
}

impl AdminBookingsPage {
    pub async fn load(
        bookings_api: &BookingsApi,
        cars_api: &CarsApi,
        session: &SessionState,
    ) -> Result<AdminBookingsPage, AppError> {
        if !session.is_authenticated() {
            return Err(AppError::unauthenticated(
                "You must sign in to see bookings",
            ));
        }
        if !session.is_admin() {
            return Err(AppError::forbidden(
                "Administrator privileges are required",
            ));
        }

        let mut bookings = bookings_api.all().await?;
        sort_newest_first(&mut bookings);
        let cars = join_cars(cars_api, &bookings).await;

        Ok(AdminBookingsPage { bookings, cars })
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "All bookings ({})", self.bookings.len());
        for booking in &self.bookings {
            let _ = write!(out, "  [{}]", booking.user_id);
            render_booking_line(&mut out, booking, &self.cars);
        }
        out
    }
}

// =============================================================================
// Mutations
// =============================================================================

/// Validates and submits a booking. Validation failures never reach the
/// network; backend rejections come back with the backend's own message.
pub async fn submit_booking(
    bookings_api: &BookingsApi,
    session: &SessionState,
    draft: &BookingDraft,
) -> Result<Booking, AppError> {
    if !session.is_authenticated() {
        return Err(AppError::unauthenticated("You must sign in to book a car"));
    }

    validate_booking(&draft.date, &draft.time, &draft.return_date, &draft.return_time)?;

    let booking = bookings_api.create(draft).await?;
    Ok(booking)
}

/// Cancels one of the user's bookings.
pub async fn cancel_booking(
    bookings_api: &BookingsApi,
    session: &SessionState,
    booking_id: i64,
) -> Result<Booking, AppError> {
    if !session.is_authenticated() {
        return Err(AppError::unauthenticated(
            "You must sign in to cancel a booking",
        ));
    }

    let cancelled = bookings_api.cancel(booking_id).await?;
    Ok(cancelled.booking)
}
