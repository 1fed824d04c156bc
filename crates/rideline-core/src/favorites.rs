//! # Favorite Set & Toggle Command
//!
//! The per-user favorite-car membership, plus the command object behind
//! optimistic toggling.
//!
//! ## Toggle Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Optimistic Toggle Lifecycle                           │
//! │                                                                         │
//! │  begin(set, car_id)                                                    │
//! │     │  snapshot prior membership                                       │
//! │     │  flip membership immediately (UI feedback)                       │
//! │     ▼                                                                   │
//! │  backend add/remove ──► Ok(success) ──► commit()   set keeps the flip  │
//! │     │                                                                   │
//! │     └─────────────────► Err / !success ─► rollback(set)  prior state   │
//! │                                            restored exactly            │
//! │                                                                         │
//! │  INVARIANT: after commit or rollback, the shared set equals exactly    │
//! │  what the settled outcome implies; no half-applied flips.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Membership is an ordered, duplicate-free id list; cards render hearts
//! in the order favorites were added.

use serde::{Deserialize, Serialize};

// =============================================================================
// Favorite Set
// =============================================================================

/// The favorite-car ids for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteSet {
    ids: Vec<i64>,
}

impl FavoriteSet {
    /// Creates a set from backend membership, dropping duplicates while
    /// preserving first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut set = FavoriteSet::default();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Whether `car_id` is currently a favorite.
    pub fn contains(&self, car_id: i64) -> bool {
        self.ids.contains(&car_id)
    }

    /// Adds `car_id` if absent. Returns true if membership changed.
    pub fn insert(&mut self, car_id: i64) -> bool {
        if self.contains(car_id) {
            return false;
        }
        self.ids.push(car_id);
        true
    }

    /// Removes `car_id` if present. Returns true if membership changed.
    pub fn remove(&mut self, car_id: i64) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| *id != car_id);
        self.ids.len() != before
    }

    /// The ids in insertion order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// Toggle Command
// =============================================================================

/// Which backend mutation the optimistic flip implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// The car was not a favorite; it must be added server-side.
    Add,
    /// The car was a favorite; it must be removed server-side.
    Remove,
}

/// A speculatively-applied favorite flip that can be undone.
///
/// Captures the prior membership at `begin`, so a failed backend call
/// restores the set exactly, including insertion order.
#[derive(Debug)]
pub struct FavoriteToggle {
    car_id: i64,
    action: ToggleAction,
    prior: Vec<i64>,
}

impl FavoriteToggle {
    /// Snapshots `set`, applies the optimistic flip for `car_id`, and
    /// returns the command to settle later.
    pub fn begin(set: &mut FavoriteSet, car_id: i64) -> Self {
        let prior = set.ids.clone();
        let action = if set.contains(car_id) {
            set.remove(car_id);
            ToggleAction::Remove
        } else {
            set.insert(car_id);
            ToggleAction::Add
        };
        FavoriteToggle {
            car_id,
            action,
            prior,
        }
    }

    /// The backend mutation this flip requires.
    pub fn action(&self) -> ToggleAction {
        self.action
    }

    /// The car being toggled.
    pub fn car_id(&self) -> i64 {
        self.car_id
    }

    /// Keeps the optimistic state as the settled truth.
    pub fn commit(self) {}

    /// Restores the membership captured at `begin`.
    pub fn rollback(self, set: &mut FavoriteSet) {
        set.ids = self.prior;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_dedups_preserving_order() {
        let set = FavoriteSet::from_ids([3, 1, 3, 2, 1]);
        assert_eq!(set.ids(), &[3, 1, 2]);
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut set = FavoriteSet::from_ids([1, 2]);
        let original = set.clone();

        let t1 = FavoriteToggle::begin(&mut set, 5);
        assert_eq!(t1.action(), ToggleAction::Add);
        assert!(set.contains(5));
        t1.commit();

        let t2 = FavoriteToggle::begin(&mut set, 5);
        assert_eq!(t2.action(), ToggleAction::Remove);
        t2.commit();

        assert_eq!(set, original);
    }

    #[test]
    fn test_rollback_restores_exact_prior_state() {
        let mut set = FavoriteSet::from_ids([4, 7, 9]);
        let prior = set.clone();

        let toggle = FavoriteToggle::begin(&mut set, 7);
        assert!(!set.contains(7));

        toggle.rollback(&mut set);
        assert_eq!(set, prior);
        assert_eq!(set.ids(), &[4, 7, 9]);
    }

    #[test]
    fn test_insert_and_remove_report_change() {
        let mut set = FavoriteSet::default();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(set.is_empty());
    }
}
