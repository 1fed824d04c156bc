//! # Rideline Terminal Library
//!
//! Application layer for the Rideline terminal shell: explicit state,
//! catalog orchestration and page composition. The binary in `main.rs` is
//! a thin dispatcher over this.
//!
//! ## Module Organization
//! ```text
//! rideline_terminal/
//! ├── lib.rs          ◄─── You are here (module map)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session state + session.toml persistence
//! │   └── cars.rs     ◄─── Catalog cache, favorites, loading flag
//! ├── catalog.rs      ◄─── Debounced search + pagination + fetch
//! ├── favorites.rs    ◄─── Optimistic toggle with rollback
//! ├── pages/
//! │   ├── mod.rs      ◄─── Page exports
//! │   ├── home.rs     ◄─── Catalog page + pager controls
//! │   ├── car_detail.rs    ◄─── Car + reviews (+ review submission)
//! │   ├── sales_charts.rs  ◄─── Chart series for the analytics screen
//! │   ├── favorites.rs     ◄─── Favorite ids joined to cars
//! │   └── bookings.rs      ◄─── My/admin bookings + booking mutations
//! └── error.rs        ◄─── AppError (code + message) for the shell
//! ```
//!
//! ## State Management
//! No singletons: `main` builds `SessionState` and `CarsState` once and
//! passes them into whatever needs them. Tests build their own with an
//! ephemeral session store.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod pages;
pub mod state;

pub use error::{AppError, ErrorCode};
