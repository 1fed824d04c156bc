//! # Pages
//!
//! Screen-level composition: each page loads what it needs through the API
//! groups and shared state, and renders to plain text. Pages return typed
//! view structs so any shell can re-skin them; the CLI just prints
//! `render()`.
//!
//! ```text
//! pages/
//! ├── home.rs          ◄── catalog page + pager controls + search echo
//! ├── car_detail.rs    ◄── one car + its reviews (+ review submission)
//! ├── sales_charts.rs  ◄── the three aggregate series + per-model series
//! ├── favorites.rs     ◄── favorite ids joined against the catalog
//! └── bookings.rs      ◄── my bookings / admin bookings / booking forms
//! ```

mod bookings;
mod car_detail;
mod favorites;
mod home;
mod sales_charts;

pub use bookings::{
    cancel_booking, submit_booking, AdminBookingsPage, MyBookingsPage,
};
pub use car_detail::{remove_review, submit_review, CarDetailPage};
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use sales_charts::SalesChartsPage;
