//! # Car Endpoints
//!
//! The paginated catalog plus admin CRUD.

use tracing::debug;

use rideline_core::{Car, CarDraft, CarPage, DEFAULT_PAGE_SIZE};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Query parameters of `GET /cars`.
///
/// All three parameters are always sent; the backend fills in its own
/// defaults otherwise and they disagree with the client's page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarQuery {
    /// Model filter; matches word-prefixes case-insensitively server-side.
    pub model: String,
    /// 1-based page number.
    pub page: u32,
    /// Cars per page.
    pub limit: u32,
}

impl Default for CarQuery {
    fn default() -> Self {
        CarQuery {
            model: String::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CarQuery {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("model", self.model.clone()),
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Car endpoint group.
#[derive(Debug, Clone)]
pub struct CarsApi {
    client: ApiClient,
}

impl CarsApi {
    pub fn new(client: ApiClient) -> Self {
        CarsApi { client }
    }

    /// One page of the catalog, optionally filtered by model text.
    pub async fn list(&self, query: &CarQuery) -> ApiResult<CarPage> {
        debug!(model = %query.model, page = query.page, limit = query.limit, "Fetching cars");
        self.client.get("cars", &query.to_pairs()).await
    }

    /// A single car by id.
    pub async fn get(&self, car_id: i64) -> ApiResult<Car> {
        self.client.get(&format!("cars/{car_id}"), &[]).await
    }

    /// Creates a car; the backend assigns the id and re-validates the
    /// make/model rules.
    pub async fn create(&self, draft: &CarDraft) -> ApiResult<Car> {
        debug!(model = %draft.model, "Creating car");
        self.client.post("cars", draft).await
    }

    /// Updates a car in place.
    pub async fn update(&self, car_id: i64, draft: &CarDraft) -> ApiResult<Car> {
        debug!(car_id, "Updating car");
        self.client.put(&format!("cars/{car_id}"), draft).await
    }

    /// Deletes a car; returns the deleted record.
    pub async fn delete(&self, car_id: i64) -> ApiResult<Car> {
        debug!(car_id, "Deleting car");
        self.client.delete(&format!("cars/{car_id}")).await
    }

    /// The total catalog size, via a one-item probe page.
    pub async fn count(&self) -> ApiResult<u32> {
        let probe = self
            .list(&CarQuery {
                limit: 1,
                ..CarQuery::default()
            })
            .await?;
        Ok(probe.total)
    }

    /// Every car in one response: probe the count, then request exactly
    /// that many. The favorites page joins against this.
    pub async fn all(&self) -> ApiResult<Vec<Car>> {
        let total = self.count().await?;
        if total == 0 {
            return Ok(Vec::new());
        }
        let page = self
            .list(&CarQuery {
                limit: total,
                ..CarQuery::default()
            })
            .await?;
        Ok(page.data)
    }
}
