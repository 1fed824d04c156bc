//! # rideline-core: Pure Client Logic for Rideline
//!
//! This crate is the **heart** of the Rideline client. It contains every
//! contract worth testing as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rideline Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal App (apps/terminal)                 │   │
//! │  │    Session state ──► Catalog state ──► Pages ──► CLI output    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rideline-api (REST client)                   │   │
//! │  │    cars, sales, favorites, reviews, bookings, auth              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rideline-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ validation │  │pagination │  │ favorites │  │   │
//! │  │   │ Car, ...  │  │  booking,  │  │  window + │  │  set +    │  │   │
//! │  │   │           │  │  car rules │  │  dedup    │  │  toggle   │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌────────────┐                                │   │
//! │  │   │  rating   │  │   sales    │                                │   │
//! │  │   │ averages  │  │  shaping   │                                │   │
//! │  │   └───────────┘  └────────────┘                                │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types shared with the REST backend
//! - [`error`] - Domain error types
//! - [`validation`] - Booking/car/review/registration rules
//! - [`pagination`] - Page-control sequence computation
//! - [`favorites`] - Favorite set and the optimistic toggle command
//! - [`rating`] - Review average aggregation
//! - [`sales`] - Chart series shaping
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, every time
//! 2. **No I/O**: network, file system and clocks are FORBIDDEN here
//! 3. **Explicit Errors**: typed enums, never strings or panics
//! 4. **Wire Fidelity**: field names match the backend byte-for-byte

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod favorites;
pub mod pagination;
pub mod rating;
pub mod sales;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rideline_core::Car` instead of
// `use rideline_core::types::Car`

pub use error::{BookingError, ValidationError};
pub use favorites::{FavoriteSet, FavoriteToggle, ToggleAction};
pub use pagination::PageControl;
pub use rating::ReviewSummary;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of cars per catalog page.
///
/// The home grid renders two rows of three cards; the backend defaults to 5
/// when the parameter is omitted, so the client always sends it explicitly.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Milliseconds a search keystroke waits before firing a fetch.
///
/// Every keystroke resets the timer; only the final pending timer fires.
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

/// Milliseconds of the cosmetic fade-out before a page swap.
///
/// Purely presentational; nothing correctness-relevant may depend on it.
pub const PAGE_FADE_MS: u64 = 300;

/// Maximum numbered buttons before the pager collapses into a window.
pub const MAX_VISIBLE_PAGE_BUTTONS: u32 = 5;

/// First selectable rental hour (09:00).
pub const RENTAL_OPEN_HOUR: u32 = 9;

/// Last selectable rental hour (17:00).
pub const RENTAL_CLOSE_HOUR: u32 = 17;
