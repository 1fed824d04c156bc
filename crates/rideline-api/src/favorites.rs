//! # Favorite Endpoints
//!
//! Per-user favorite membership. All three routes require authentication;
//! anonymous callers are stopped in the app layer before any request is
//! built.

use tracing::debug;

use rideline_core::{FavoriteIds, FavoriteMutation};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Favorites endpoint group.
#[derive(Debug, Clone)]
pub struct FavoritesApi {
    client: ApiClient,
}

impl FavoritesApi {
    pub fn new(client: ApiClient) -> Self {
        FavoritesApi { client }
    }

    /// The user's favorite car ids. Unknown users get an empty list, not an
    /// error.
    pub async fn for_user(&self, username: &str) -> ApiResult<Vec<i64>> {
        debug!(%username, "Fetching favorites");
        let ids: FavoriteIds = self.client.get(&format!("favorites/{username}"), &[]).await?;
        Ok(ids.car_ids)
    }

    /// Marks a car as favorite. Idempotent server-side.
    pub async fn add(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
        debug!(%username, car_id, "Adding favorite");
        self.client
            .post_empty(&format!("favorites/{username}/add/{car_id}"))
            .await
    }

    /// Unmarks a favorite. `success: false` when the car was not a favorite
    /// to begin with.
    pub async fn remove(&self, username: &str, car_id: i64) -> ApiResult<FavoriteMutation> {
        debug!(%username, car_id, "Removing favorite");
        self.client
            .delete(&format!("favorites/{username}/remove/{car_id}"))
            .await
    }
}
