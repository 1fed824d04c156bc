//! # Favorite Toggling
//!
//! The effectful half of favorite reconciliation: the pure flip/rollback
//! command lives in rideline-core; this module decides when to call the
//! backend and how to settle.
//!
//! ## Settle Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  toggle_favorite(car_id)                                │
//! │                                                                         │
//! │  no session token ──► Unauthenticated error, NO network call           │
//! │                                                                         │
//! │  flip locally (optimistic) ──► backend add/remove                      │
//! │        │                                                                │
//! │        ├── Ok { success: true }  ──► commit: flipped membership is     │
//! │        │                             the shared truth                  │
//! │        ├── Ok { success: false } ──► rollback + backend message        │
//! │        └── Err(transport)        ──► rollback + error                  │
//! │                                                                         │
//! │  INVARIANT: the shared favorite set and every card's flag agree once   │
//! │  the operation settles, success or rollback.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use tracing::{debug, warn};

use rideline_api::{ApiResult, FavoritesApi};
use rideline_core::{FavoriteMutation, FavoriteSet, FavoriteToggle, ToggleAction};

use crate::error::AppError;
use crate::state::{CarsState, SessionState};

// =============================================================================
// Backend Seam
// =============================================================================

/// The two favorite mutations, abstracted so the settle logic is testable
/// without a server.
#[async_trait]
pub trait FavoriteBackend: Send + Sync {
    async fn add(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation>;
    async fn remove(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation>;
}

#[async_trait]
impl FavoriteBackend for FavoritesApi {
    async fn add(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
        FavoritesApi::add(self, username, car_id).await
    }

    async fn remove(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
        FavoritesApi::remove(self, username, car_id).await
    }
}

// =============================================================================
// Toggle
// =============================================================================

/// Flips `car_id` for the signed-in user. Returns whether the car is a
/// favorite after the operation settles.
pub async fn toggle_favorite<B: FavoriteBackend>(
    backend: &B,
    session: &SessionState,
    cars: &CarsState,
    car_id: i64,
) -> Result<bool, AppError> {
    let Some(current) = session.current() else {
        return Err(AppError::unauthenticated(
            "You must sign in to manage favorites",
        ));
    };

    // Optimistic flip first: the card updates before the network answers.
    let toggle = cars.with_favorites(|set| FavoriteToggle::begin(set, car_id));
    let action = toggle.action();
    debug!(car_id, ?action, "Toggling favorite");

    let outcome = match action {
        ToggleAction::Add => backend.add(&current.username, car_id).await,
        ToggleAction::Remove => backend.remove(&current.username, car_id).await,
    };

    match outcome {
        Ok(mutation) if mutation.success => {
            toggle.commit();
            Ok(action == ToggleAction::Add)
        }
        Ok(mutation) => {
            warn!(car_id, message = %mutation.message, "Favorite mutation refused, rolling back");
            cars.with_favorites(|set| toggle.rollback(set));
            Err(AppError::backend(mutation.message))
        }
        Err(e) => {
            warn!(car_id, error = %e, "Favorite mutation failed, rolling back");
            cars.with_favorites(|set| toggle.rollback(set));
            Err(e.into())
        }
    }
}

/// Loads the user's favorite membership into shared state. Signed-out
/// users simply get an empty set; no request is made.
pub async fn load_favorites<B>(
    backend: &B,
    session: &SessionState,
    cars: &CarsState,
) -> Result<(), AppError>
where
    B: FavoriteSource,
{
    let Some(current) = session.current() else {
        cars.set_favorites(FavoriteSet::default());
        return Ok(());
    };

    let ids = backend.for_user(&current.username).await?;
    cars.set_favorites(FavoriteSet::from_ids(ids));
    Ok(())
}

/// Read side of the favorites backend.
#[async_trait]
pub trait FavoriteSource: Send + Sync {
    async fn for_user(&self, username: &str) -> ApiResult<Vec<i64>>;
}

#[async_trait]
impl FavoriteSource for FavoritesApi {
    async fn for_user(&self, username: &str) -> ApiResult<Vec<i64>> {
        FavoritesApi::for_user(self, username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Arc, Mutex};

    use rideline_api::ApiError;
    use rideline_core::Session;

    use crate::error::ErrorCode;
    use crate::state::SessionStore;

    #[derive(Debug, Clone, Copy)]
    enum Mode {
        Accept,
        Refuse,
        Fail,
    }

    struct StubBackend {
        mode: Mode,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl StubBackend {
        fn new(mode: Mode) -> Self {
            StubBackend {
                mode,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn respond(&self, call: String) -> ApiResult<FavoriteMutation> {
            self.calls.lock().unwrap().push(call);
            match self.mode {
                Mode::Accept => Ok(FavoriteMutation {
                    success: true,
                    message: "ok".into(),
                }),
                Mode::Refuse => Ok(FavoriteMutation {
                    success: false,
                    message: "car is not a favorite".into(),
                }),
                Mode::Fail => Err(ApiError::Rejected {
                    status: 500,
                    message: "boom".into(),
                }),
            }
        }
    }

    #[async_trait]
    impl FavoriteBackend for StubBackend {
        async fn add(&self, _username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
            self.respond(format!("add {car_id}"))
        }

        async fn remove(&self, _username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
            self.respond(format!("remove {car_id}"))
        }
    }

    fn signed_in() -> SessionState {
        let state = SessionState::new(SessionStore::ephemeral());
        state.login(Session {
            token: "tok".into(),
            username: "yu@yu.com".into(),
            is_admin: false,
        });
        state
    }

    #[tokio::test]
    async fn test_signed_out_toggle_makes_no_call() {
        let backend = StubBackend::new(Mode::Accept);
        let session = SessionState::new(SessionStore::ephemeral());
        let cars = CarsState::new();

        let err = toggle_favorite(&backend, &session, &cars, 3)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
        assert!(backend.calls.lock().unwrap().is_empty());
        assert!(!cars.is_favorite(3));
    }

    #[tokio::test]
    async fn test_double_toggle_round_trips_membership() {
        let backend = StubBackend::new(Mode::Accept);
        let session = signed_in();
        let cars = CarsState::new();
        cars.set_favorites(FavoriteSet::from_ids([1, 2]));

        let now = toggle_favorite(&backend, &session, &cars, 5).await.unwrap();
        assert!(now);
        assert!(cars.is_favorite(5));

        let now = toggle_favorite(&backend, &session, &cars, 5).await.unwrap();
        assert!(!now);
        assert_eq!(cars.snapshot().favorites, FavoriteSet::from_ids([1, 2]));

        let calls = backend.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["add 5", "remove 5"]);
    }

    #[tokio::test]
    async fn test_transport_failure_rolls_back() {
        let backend = StubBackend::new(Mode::Fail);
        let session = signed_in();
        let cars = CarsState::new();
        cars.set_favorites(FavoriteSet::from_ids([7]));

        let err = toggle_favorite(&backend, &session, &cars, 7)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Backend);
        // The optimistic removal was undone.
        assert!(cars.is_favorite(7));
    }

    #[tokio::test]
    async fn test_refused_mutation_rolls_back_with_message() {
        let backend = StubBackend::new(Mode::Refuse);
        let session = signed_in();
        let cars = CarsState::new();

        let err = toggle_favorite(&backend, &session, &cars, 4)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Backend);
        assert!(err.message.contains("not a favorite"));
        assert!(!cars.is_favorite(4));
    }
}
