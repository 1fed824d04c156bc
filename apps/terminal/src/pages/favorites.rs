//! # Favorites Page
//!
//! The user's bookmarked cars. The backend only stores ids, so the page
//! probes the catalog size, fetches the whole catalog in one request, and
//! joins locally.

use std::fmt::Write as _;

use rideline_api::{CarsApi, FavoritesApi};
use rideline_core::{Car, FavoriteSet};

use crate::error::AppError;
use crate::state::{CarsState, SessionState};

/// The favorites screen's view data.
#[derive(Debug, Clone)]
pub struct FavoritesPage {
    pub cars: Vec<Car>,
}

impl FavoritesPage {
    /// Loads the favorite cars for the signed-in user, refreshing the
    /// shared favorite set along the way so every other screen agrees.
    pub async fn load(
        cars_api: &CarsApi,
        favorites_api: &FavoritesApi,
        session: &SessionState,
        state: &CarsState,
    ) -> Result<FavoritesPage, AppError> {
        let Some(current) = session.current() else {
            return Err(AppError::unauthenticated(
                "You must sign in to see your favorites",
            ));
        };

        let ids = favorites_api.for_user(&current.username).await?;
        let membership = FavoriteSet::from_ids(ids);
        state.set_favorites(membership.clone());

        if membership.is_empty() {
            return Ok(FavoritesPage { cars: Vec::new() });
        }

        let all = cars_api.all().await?;
        let cars = all
            .into_iter()
            .filter(|car| membership.contains(car.id))
            .collect();

        Ok(FavoritesPage { cars })
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Favorites ({} cars)", self.cars.len());
        for car in &self.cars {
            let _ = writeln!(out, "  [{}] {} ({})", car.id, car.display_name(), car.year);
        }
        if self.cars.is_empty() {
            let _ = writeln!(out, "  (none yet; toggle one from the catalog)");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorCode;
    use crate::state::SessionStore;

    #[tokio::test]
    async fn test_signed_out_load_is_blocked() {
        let client = rideline_api::ApiClient::new(&rideline_api::ApiConfig::default()).unwrap();
        let err = FavoritesPage::load(
            &CarsApi::new(client.clone()),
            &FavoritesApi::new(client),
            &SessionState::new(SessionStore::ephemeral()),
            &CarsState::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_render_empty_state() {
        let page = FavoritesPage { cars: Vec::new() };
        assert!(page.render().contains("none yet"));
    }
}
