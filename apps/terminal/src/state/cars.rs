//! # Cars State
//!
//! The cached catalog page, total count, favorite set and loading flag.
//!
//! ## Mutation Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cars State Operations                                │
//! │                                                                         │
//! │  User Action              Helper                 State Change           │
//! │  ───────────              ──────                 ────────────           │
//! │                                                                         │
//! │  Page fetched ──────────► set_page() ──────────► cars, total replaced  │
//! │                                                                         │
//! │  Car edited ────────────► update_car() ────────► replaced in place by  │
//! │                                                  id, prepended if new  │
//! │                                                                         │
//! │  Car deleted ───────────► delete_car() ────────► filtered out by id    │
//! │                                                                         │
//! │  Favorites loaded ──────► set_favorites() ─────► whole set replaced    │
//! │                                                  (every card agrees)   │
//! │                                                                         │
//! │  Fetch in flight ───────► begin/end_loading ───► loading flag          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use rideline_core::{Car, FavoriteSet};

#[derive(Debug, Default)]
struct CarsInner {
    cars: Vec<Car>,
    total: u32,
    favorites: FavoriteSet,
    loading: bool,
}

/// A point-in-time copy for rendering.
#[derive(Debug, Clone, Default)]
pub struct CarsSnapshot {
    pub cars: Vec<Car>,
    pub total: u32,
    pub favorites: FavoriteSet,
    pub loading: bool,
}

/// Shared handle on the catalog cache.
#[derive(Debug, Clone, Default)]
pub struct CarsState {
    inner: Arc<Mutex<CarsInner>>,
}

impl CarsState {
    pub fn new() -> Self {
        CarsState::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CarsInner> {
        self.inner.lock().expect("cars lock poisoned")
    }

    /// Replaces the cached page after a fetch.
    pub fn set_page(&self, cars: Vec<Car>, total: u32) {
        let mut inner = self.lock();
        inner.cars = cars;
        inner.total = total;
    }

    /// Empties the page, the failed-fetch fallback.
    pub fn clear_page(&self) {
        self.set_page(Vec::new(), 0);
    }

    /// Replaces a car in place by id, or prepends it so a just-created car
    /// shows up immediately.
    pub fn update_car(&self, car: Car) {
        let mut inner = self.lock();
        match inner.cars.iter_mut().find(|c| c.id == car.id) {
            Some(slot) => *slot = car,
            None => inner.cars.insert(0, car),
        }
    }

    /// Drops a car from the cached page.
    pub fn delete_car(&self, car_id: i64) {
        self.lock().cars.retain(|c| c.id != car_id);
    }

    /// Replaces the favorite set so every subscriber re-renders from the
    /// same membership.
    pub fn set_favorites(&self, favorites: FavoriteSet) {
        self.lock().favorites = favorites;
    }

    pub fn is_favorite(&self, car_id: i64) -> bool {
        self.lock().favorites.contains(car_id)
    }

    /// Runs a closure against the favorite set under the lock. The toggle
    /// command uses this for its begin/rollback steps; the closure must not
    /// block.
    pub fn with_favorites<R>(&self, f: impl FnOnce(&mut FavoriteSet) -> R) -> R {
        f(&mut self.lock().favorites)
    }

    pub fn begin_loading(&self) {
        self.lock().loading = true;
    }

    pub fn end_loading(&self) {
        self.lock().loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn total(&self) -> u32 {
        self.lock().total
    }

    /// A consistent copy of everything a page render needs.
    pub fn snapshot(&self) -> CarsSnapshot {
        let inner = self.lock();
        CarsSnapshot {
            cars: inner.cars.clone(),
            total: inner.total,
            favorites: inner.favorites.clone(),
            loading: inner.loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: i64, model: &str) -> Car {
        Car {
            id,
            make: "Seat".into(),
            model: model.into(),
            year: 2021,
            features: vec![],
        }
    }

    #[test]
    fn test_update_car_replaces_in_place() {
        let state = CarsState::new();
        state.set_page(vec![car(1, "Ibiza"), car(2, "Leon")], 2);

        state.update_car(car(2, "Leon FR"));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.cars[1].model, "Leon FR");
        assert_eq!(snapshot.cars.len(), 2);
    }

    #[test]
    fn test_update_unknown_car_prepends() {
        let state = CarsState::new();
        state.set_page(vec![car(1, "Ibiza")], 1);

        state.update_car(car(9, "Arona"));
        let snapshot = state.snapshot();
        assert_eq!(snapshot.cars[0].id, 9);
        assert_eq!(snapshot.cars.len(), 2);
    }

    #[test]
    fn test_delete_car_filters_by_id() {
        let state = CarsState::new();
        state.set_page(vec![car(1, "Ibiza"), car(2, "Leon")], 2);

        state.delete_car(1);
        let snapshot = state.snapshot();
        assert_eq!(snapshot.cars.len(), 1);
        assert_eq!(snapshot.cars[0].id, 2);
    }

    #[test]
    fn test_favorites_shared_membership() {
        let state = CarsState::new();
        state.set_favorites(FavoriteSet::from_ids([1, 3]));

        assert!(state.is_favorite(1));
        assert!(!state.is_favorite(2));

        state.with_favorites(|set| {
            set.insert(2);
        });
        assert!(state.is_favorite(2));
    }

    #[test]
    fn test_loading_flag() {
        let state = CarsState::new();
        assert!(!state.is_loading());
        state.begin_loading();
        assert!(state.is_loading());
        state.end_loading();
        assert!(!state.is_loading());
    }
}
