//! # Sales Endpoints
//!
//! The chart datasets. Three aggregates come pre-grouped from the backend;
//! the per-model series arrives as raw records and is grouped client-side.

use serde::Deserialize;
use tracing::debug;

use rideline_core::sales::{units_by_year, unique_models, YearUnits};
use rideline_core::{CountryTotal, ModelTotal, SaleRecord, YearTotal};

use crate::cars::CarsApi;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// What `GET /sales` returns.
#[derive(Debug, Deserialize)]
struct SalesPage {
    #[serde(default)]
    data: Vec<SaleRecord>,
    #[serde(default)]
    #[allow(dead_code)]
    total: u32,
}

/// Sales endpoint group.
#[derive(Debug, Clone)]
pub struct SalesApi {
    client: ApiClient,
}

impl SalesApi {
    pub fn new(client: ApiClient) -> Self {
        SalesApi { client }
    }

    /// Raw sale records for one model.
    pub async fn for_model(&self, model: &str) -> ApiResult<Vec<SaleRecord>> {
        debug!(%model, "Fetching model sales");
        let page: SalesPage = self
            .client
            .get("sales", &[("model", model.to_string())])
            .await?;
        Ok(page.data)
    }

    /// One model's units summed per year, ascending. This is the per-model
    /// chart dataset.
    pub async fn model_units_by_year(&self, model: &str) -> ApiResult<Vec<YearUnits>> {
        let records = self.for_model(model).await?;
        Ok(units_by_year(&records))
    }

    /// Units per country, backend-sorted descending.
    pub async fn by_country(&self) -> ApiResult<Vec<CountryTotal>> {
        debug!("Fetching sales by country");
        self.client.get("sales/annual", &[]).await
    }

    /// Units per year, backend-sorted ascending.
    pub async fn by_year(&self) -> ApiResult<Vec<YearTotal>> {
        debug!("Fetching sales by year");
        self.client.get("sales/total-by-year", &[]).await
    }

    /// Best-selling models, backend-sorted descending.
    pub async fn top_models(&self) -> ApiResult<Vec<ModelTotal>> {
        debug!("Fetching top models");
        self.client.get("sales/top-models", &[]).await
    }

    /// Distinct models for the chart's model picker, first-seen order.
    pub async fn available_models(&self) -> ApiResult<Vec<String>> {
        let cars = CarsApi::new(self.client.clone()).all().await?;
        Ok(unique_models(&cars))
    }
}
