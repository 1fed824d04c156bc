//! # State Module
//!
//! Application state for the terminal shell.
//!
//! ## Why Multiple State Types?
//! Instead of one grab-bag `AppState`, each concern gets its own type:
//!
//! 1. **Better Separation of Concerns**: each state type has one job
//! 2. **Easier Testing**: pages and commands receive only what they use
//! 3. **No Singletons**: state is constructed in `main` and passed down
//!    explicitly; any shell (GUI, tests) can build its own
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       State Architecture                                │
//! │                                                                         │
//! │  ┌────────────────────┐        ┌───────────────────────────────────┐   │
//! │  │   SessionState     │        │           CarsState               │   │
//! │  │                    │        │                                   │   │
//! │  │  Arc<RwLock<       │        │  Arc<Mutex<CarsInner>>            │   │
//! │  │    Option<Session>>│        │   • current catalog page          │   │
//! │  │  + SessionStore    │        │   • total count                   │   │
//! │  │    (session.toml)  │        │   • favorite-id set               │   │
//! │  │                    │        │   • loading flag                  │   │
//! │  └────────────────────┘        └───────────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Locks guard short read-modify-write sections only                   │
//! │  • Never held across an await                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cars;
mod session;

pub use cars::{CarsSnapshot, CarsState};
pub use session::{SessionState, SessionStore};
