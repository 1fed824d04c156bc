//! # rideline-api: REST Client for the Rental Backend
//!
//! Typed endpoint wrappers over HTTP. This crate owns every network
//! round-trip; it holds no cache and no session. Callers own state.
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Backend Surface                                  │
//! │                                                                         │
//! │  AuthApi        GET /login · POST /register                            │
//! │  CarsApi        GET/POST /cars · GET/PUT/DELETE /cars/{id}             │
//! │  FavoritesApi   GET /favorites/{user} · POST .../add/{id}              │
//! │                 DELETE .../remove/{id}                                 │
//! │  ReviewsApi     GET /reviews/{car} · POST /reviews                     │
//! │                 PUT/DELETE /reviews/{id}                               │
//! │  BookingsApi    POST /bookings · GET /user/bookings                    │
//! │                 DELETE /bookings/{id} · GET /admin/bookings            │
//! │  SalesApi       GET /sales · /sales/annual · /sales/total-by-year      │
//! │                 /sales/top-models                                      │
//! │                                                                         │
//! │  All payloads are JSON over HTTP. Auth is `Bearer <token>` from the    │
//! │  session, or `Basic base64(user:pass)` on the auth endpoints.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod bookings;
pub mod cars;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod reviews;
pub mod sales;

pub use auth::AuthApi;
pub use bookings::BookingsApi;
pub use cars::{CarQuery, CarsApi};
pub use client::{ApiClient, AuthMode};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use favorites::FavoritesApi;
pub use reviews::ReviewsApi;
pub use sales::SalesApi;
