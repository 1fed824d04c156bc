//! # Sales Charts Page
//!
//! The admin analytics screen. The three general datasets load
//! concurrently; the per-model series is added when a model is selected. What gets produced here are labeled
//! series; drawing them is the shell's (or a chart library's) business.

use std::fmt::Write as _;

use tracing::warn;

use rideline_api::SalesApi;
use rideline_core::sales::{
    country_series, model_series, top_models_series, year_series, ChartSeries,
};

use crate::error::AppError;

/// The sales screen's view data.
#[derive(Debug, Clone)]
pub struct SalesChartsPage {
    pub by_year: ChartSeries,
    pub by_country: ChartSeries,
    pub top_models: ChartSeries,
    /// Present when a model filter is selected.
    pub model: Option<ChartSeries>,
    /// Models offered by the picker above the per-model chart.
    pub available_models: Vec<String>,
}

impl SalesChartsPage {
    /// Loads the three aggregates concurrently, then the optional per-model
    /// series. A failed model list degrades to an empty picker instead of
    /// failing the page.
    pub async fn load(sales: &SalesApi, model: Option<&str>) -> Result<SalesChartsPage, AppError> {
        let (years, countries, top) =
            tokio::try_join!(sales.by_year(), sales.by_country(), sales.top_models())?;

        let model_chart = match model {
            Some(m) => {
                let points = sales.model_units_by_year(m).await?;
                Some(model_series(m, &points))
            }
            None => None,
        };

        let available_models = match sales.available_models().await {
            Ok(models) => models,
            Err(e) => {
                warn!(error = %e, "Could not load the model picker");
                Vec::new()
            }
        };

        Ok(SalesChartsPage {
            by_year: year_series(&years),
            by_country: country_series(&countries),
            top_models: top_models_series(&top),
            model: model_chart,
            available_models,
        })
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(series) = &self.model {
            render_series(&mut out, series);
        }
        render_series(&mut out, &self.by_year);
        render_series(&mut out, &self.by_country);
        render_series(&mut out, &self.top_models);

        if !self.available_models.is_empty() {
            let _ = writeln!(out, "Models: {}", self.available_models.join(", "));
        }

        out
    }
}

fn render_series(out: &mut String, series: &ChartSeries) {
    let _ = writeln!(out, "{}", series.label);
    if series.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }
    for (label, value) in series.labels.iter().zip(&series.values) {
        let _ = writeln!(out, "  {label:<12} {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_series() {
        let page = SalesChartsPage {
            by_year: ChartSeries {
                label: "Units sold per year".into(),
                labels: vec!["2021".into(), "2022".into()],
                values: vec![100, 140],
            },
            by_country: ChartSeries {
                label: "Units sold per country".into(),
                labels: vec!["Spain".into()],
                values: vec![240],
            },
            top_models: ChartSeries {
                label: "Units sold".into(),
                labels: vec!["Ibiza".into()],
                values: vec![240],
            },
            model: None,
            available_models: vec!["Ibiza".into(), "Leon".into()],
        };

        let text = page.render();
        assert!(text.contains("Units sold per year"));
        assert!(text.contains("2021"));
        assert!(text.contains("Spain"));
        assert!(text.contains("Models: Ibiza, Leon"));
    }
}
