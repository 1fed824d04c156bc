//! # Wire Types
//!
//! Domain types shared with the REST backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Wire Types                                      │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Car        │   │    Booking      │   │     Review      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  make, model    │   │  car_id, user_id│   │  car_id         │       │
//! │  │  year           │   │  date/time      │   │  username       │       │
//! │  │  features       │   │  return pair    │   │  rating (1-5)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SaleRecord    │   │    Session      │   │   FavoriteIds   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  model, country │   │  token          │   │  carIds         │       │
//! │  │  year           │   │  username       │   │  (camelCase on  │       │
//! │  │  units_sold     │   │  is_admin       │   │   the wire)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field-Name Fidelity
//! Field names mirror the backend exactly: cars, bookings and sales are
//! snake_case, while favorites (`carIds`) and the review page (`avgRating`)
//! are camelCase. Ids are backend-assigned integers; the client never mints
//! one.

use serde::{Deserialize, Serialize};

// =============================================================================
// Cars
// =============================================================================

/// A car in the rental catalog. Owned by the backend; the client holds a
/// cached copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Car {
    /// Display name used in lists and booking summaries, e.g. "Seat Ibiza".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// A car create/edit submission. The backend assigns the id on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub features: Vec<String>,
}

impl CarDraft {
    /// Builds a draft from raw form input, trimming fields and splitting the
    /// comma-separated features line the way the form does.
    pub fn from_form(make: &str, model: &str, year: i32, features: &str) -> Self {
        CarDraft {
            make: make.trim().to_string(),
            model: model.trim().to_string(),
            year,
            features: features
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect(),
        }
    }
}

/// One page of the car catalog, as returned by `GET /cars`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarPage {
    #[serde(default)]
    pub data: Vec<Car>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

// =============================================================================
// Bookings
// =============================================================================

/// A reservation of a car for a pickup→return interval.
///
/// Dates and times travel as the strings the form submits (`YYYY-MM-DD`,
/// `HH:MM`); parsing happens only inside the validity check. `user_id` is
/// opaque; the backend has used both numeric ids and usernames here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub user_id: String,
    pub car_id: i64,
    pub date: String,
    pub time: String,
    pub return_date: String,
    pub return_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The client-composed booking submission (`POST /bookings`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDraft {
    pub car_id: i64,
    pub date: String,
    pub time: String,
    pub return_date: String,
    pub return_time: String,
}

// =============================================================================
// Reviews
// =============================================================================

/// A user review of a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub car_id: i64,
    pub username: String,
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub date: String,
}

/// Reviews for one car plus the backend-computed aggregate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPage {
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(rename = "avgRating", default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub total: u32,
}

/// A review create/edit submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub car_id: i64,
    pub text: String,
    pub rating: u8,
}

// =============================================================================
// Sales
// =============================================================================

/// One raw sales record (`GET /sales`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub model: String,
    pub country: String,
    pub year: i32,
    pub units_sold: i64,
}

/// Units summed per country (`GET /sales/annual`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryTotal {
    pub country: String,
    pub total_units: i64,
}

/// Units summed per year (`GET /sales/total-by-year`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: i32,
    pub total_units: i64,
}

/// Units summed per model (`GET /sales/top-models`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTotal {
    pub model: String,
    pub total_units: i64,
}

// =============================================================================
// Session & Favorites
// =============================================================================

/// The signed-in session. Created at login, destroyed at logout; shells
/// may persist it between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// The favorite-car id list for one user (`GET /favorites/{username}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteIds {
    #[serde(rename = "carIds", default)]
    pub car_ids: Vec<i64>,
}

/// Outcome of a favorite add/remove mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoriteMutation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_page_deserializes_backend_shape() {
        let json = r#"{
            "data": [{"id": 3, "make": "Seat", "model": "Ibiza", "year": 2021, "features": ["GPS"]}],
            "total": 11,
            "page": 2,
            "limit": 6
        }"#;
        let page: CarPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].display_name(), "Seat Ibiza");
        assert_eq!(page.total, 11);
        assert_eq!(page.page, 2);
    }

    #[test]
    fn test_review_page_uses_camel_case_aggregate() {
        let json = r#"{"reviews": [], "avgRating": 4.3, "total": 7}"#;
        let page: ReviewPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.avg_rating, 4.3);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn test_favorite_ids_wire_name() {
        let ids: FavoriteIds = serde_json::from_str(r#"{"carIds": [1, 4, 9]}"#).unwrap();
        assert_eq!(ids.car_ids, vec![1, 4, 9]);
        let round = serde_json::to_string(&ids).unwrap();
        assert!(round.contains("carIds"));
    }

    #[test]
    fn test_car_draft_from_form_splits_features() {
        let draft = CarDraft::from_form(" Seat ", "Ibiza", 2021, "GPS, , Bluetooth ,");
        assert_eq!(draft.make, "Seat");
        assert_eq!(draft.features, vec!["GPS", "Bluetooth"]);
    }

    #[test]
    fn test_booking_draft_serializes_form_fields() {
        let draft = BookingDraft {
            car_id: 5,
            date: "2024-05-01".into(),
            time: "09:00".into(),
            return_date: "2024-05-02".into(),
            return_time: "10:00".into(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["car_id"], 5);
        assert_eq!(json["return_time"], "10:00");
    }
}
