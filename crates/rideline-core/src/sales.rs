//! # Sales Data Shaping
//!
//! Turns raw sale records and backend aggregates into the labeled series a
//! chart widget consumes. Rendering is someone else's job; this module only
//! decides what the axes say.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Sales Data Pipeline                                 │
//! │                                                                         │
//! │  GET /sales?model=X ──► [SaleRecord] ──► units_by_year ──► per-model   │
//! │                                                            series      │
//! │  GET /sales/total-by-year ──► [YearTotal]    ──┐                       │
//! │  GET /sales/annual        ──► [CountryTotal] ──┼──► ChartSeries        │
//! │  GET /sales/top-models    ──► [ModelTotal]   ──┘    {label, labels,    │
//! │                                                      values}           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use crate::types::{Car, CountryTotal, ModelTotal, SaleRecord, YearTotal};

/// Units sold in one year, the point type of the per-model chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearUnits {
    pub year: i32,
    pub units: i64,
}

/// Groups raw records by year and sums the units, ascending by year.
///
/// The per-model endpoint returns raw records; the other aggregates come
/// pre-grouped from the backend.
pub fn units_by_year(records: &[SaleRecord]) -> Vec<YearUnits> {
    let mut grouped: BTreeMap<i32, i64> = BTreeMap::new();
    for record in records {
        *grouped.entry(record.year).or_insert(0) += record.units_sold;
    }
    grouped
        .into_iter()
        .map(|(year, units)| YearUnits { year, units })
        .collect()
}

/// Distinct car models in first-seen order.
///
/// Feeds the model picker above the per-model chart.
pub fn unique_models(cars: &[Car]) -> Vec<String> {
    let mut models: Vec<String> = Vec::new();
    for car in cars {
        if !models.iter().any(|m| *m == car.model) {
            models.push(car.model.clone());
        }
    }
    models
}

// =============================================================================
// Chart Series
// =============================================================================

/// One labeled dataset, ready for any bar-chart widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    /// Dataset legend, e.g. `Units sold (Ibiza)`.
    pub label: String,
    /// X-axis labels, parallel to `values`.
    pub labels: Vec<String>,
    /// Y-axis values, parallel to `labels`.
    pub values: Vec<i64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Series for one model's units per year.
pub fn model_series(model: &str, points: &[YearUnits]) -> ChartSeries {
    ChartSeries {
        label: format!("Units sold ({model})"),
        labels: points.iter().map(|p| p.year.to_string()).collect(),
        values: points.iter().map(|p| p.units).collect(),
    }
}

/// Series for total units per year across all models.
pub fn year_series(totals: &[YearTotal]) -> ChartSeries {
    ChartSeries {
        label: "Units sold per year".to_string(),
        labels: totals.iter().map(|t| t.year.to_string()).collect(),
        values: totals.iter().map(|t| t.total_units).collect(),
    }
}

/// Series for total units per country.
pub fn country_series(totals: &[CountryTotal]) -> ChartSeries {
    ChartSeries {
        label: "Units sold per country".to_string(),
        labels: totals.iter().map(|t| t.country.clone()).collect(),
        values: totals.iter().map(|t| t.total_units).collect(),
    }
}

/// Series for the best-selling models ranking.
pub fn top_models_series(totals: &[ModelTotal]) -> ChartSeries {
    ChartSeries {
        label: "Units sold".to_string(),
        labels: totals.iter().map(|t| t.model.clone()).collect(),
        values: totals.iter().map(|t| t.total_units).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, year: i32, units: i64) -> SaleRecord {
        SaleRecord {
            model: model.into(),
            country: "Spain".into(),
            year,
            units_sold: units,
        }
    }

    #[test]
    fn test_units_by_year_groups_and_sorts() {
        let records = vec![
            record("Ibiza", 2022, 40),
            record("Ibiza", 2021, 10),
            record("Ibiza", 2022, 5),
        ];
        let points = units_by_year(&records);
        assert_eq!(
            points,
            vec![
                YearUnits { year: 2021, units: 10 },
                YearUnits { year: 2022, units: 45 },
            ]
        );
    }

    #[test]
    fn test_unique_models_first_seen_order() {
        let cars = vec![
            Car { id: 1, make: "Seat".into(), model: "Ibiza".into(), year: 2021, features: vec![] },
            Car { id: 2, make: "Seat".into(), model: "Leon".into(), year: 2022, features: vec![] },
            Car { id: 3, make: "Seat".into(), model: "Ibiza".into(), year: 2023, features: vec![] },
        ];
        assert_eq!(unique_models(&cars), vec!["Ibiza", "Leon"]);
    }

    #[test]
    fn test_model_series_parallel_axes() {
        let points = vec![
            YearUnits { year: 2021, units: 10 },
            YearUnits { year: 2022, units: 45 },
        ];
        let series = model_series("Ibiza", &points);
        assert_eq!(series.label, "Units sold (Ibiza)");
        assert_eq!(series.labels, vec!["2021", "2022"]);
        assert_eq!(series.values, vec![10, 45]);
    }

    #[test]
    fn test_country_series_from_backend_aggregate() {
        let totals = vec![
            CountryTotal { country: "Spain".into(), total_units: 120 },
            CountryTotal { country: "France".into(), total_units: 80 },
        ];
        let series = country_series(&totals);
        assert_eq!(series.labels, vec!["Spain", "France"]);
        assert_eq!(series.values, vec![120, 80]);
        assert!(!series.is_empty());
    }
}
