//! # Home Page
//!
//! The paginated catalog: car list, favorite markers, pager controls and
//! the current search text.

use std::fmt::Write as _;

use rideline_core::pagination::{page_controls, PageControl};

use crate::catalog::{CarSource, CatalogManager};
use crate::state::CarsSnapshot;

/// The home screen's view data.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub snapshot: CarsSnapshot,
    pub page: u32,
    pub total_pages: u32,
    pub controls: Vec<PageControl>,
    pub search: String,
}

impl HomePage {
    /// Fetches the current page, then snapshots it.
    pub async fn load<S: CarSource + Clone>(catalog: &CatalogManager<S>) -> HomePage {
        catalog.fetch_current().await;
        HomePage::from_catalog(catalog)
    }

    /// Snapshots without fetching, used after the catalog manager already
    /// fetched (debounce firing, page change).
    pub fn from_catalog<S: CarSource + Clone>(catalog: &CatalogManager<S>) -> HomePage {
        let snapshot = catalog.state().snapshot();
        let page = catalog.current_page();
        let total_pages = catalog.total_pages();
        HomePage {
            snapshot,
            page,
            total_pages,
            controls: page_controls(page, total_pages),
            search: catalog.search_text(),
        }
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.search.is_empty() {
            let _ = writeln!(out, "Catalog ({} cars)", self.snapshot.total);
        } else {
            let _ = writeln!(
                out,
                "Catalog ({} cars matching \"{}\")",
                self.snapshot.total, self.search
            );
        }

        if self.snapshot.loading {
            let _ = writeln!(out, "(loading…)");
        }

        for car in &self.snapshot.cars {
            let heart = if self.snapshot.favorites.contains(car.id) {
                " ♥"
            } else {
                ""
            };
            let _ = write!(out, "  [{}] {} ({}){heart}", car.id, car.display_name(), car.year);
            if car.features.is_empty() {
                let _ = writeln!(out);
            } else {
                let _ = writeln!(out, " - {}", car.features.join(", "));
            }
        }

        if self.snapshot.cars.is_empty() && !self.snapshot.loading {
            let _ = writeln!(out, "  (no cars)");
        }

        if self.total_pages > 1 {
            let _ = writeln!(out, "  {}", render_controls(&self.controls, self.page));
        }

        out
    }
}

/// The pager row: `1 … 6 [7] 8 … 12`, brackets marking the active page.
pub fn render_controls(controls: &[PageControl], current: u32) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Page(n) if *n == current => format!("[{n}]"),
            PageControl::Page(n) => n.to_string(),
            PageControl::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_row_rendering() {
        let controls = page_controls(7, 12);
        assert_eq!(render_controls(&controls, 7), "1 … 6 [7] 8 … 12");

        let controls = page_controls(1, 3);
        assert_eq!(render_controls(&controls, 1), "[1] 2 3");
    }

    #[test]
    fn test_render_marks_favorites() {
        use rideline_core::{Car, FavoriteSet};

        let page = HomePage {
            snapshot: CarsSnapshot {
                cars: vec![
                    Car {
                        id: 1,
                        make: "Seat".into(),
                        model: "Ibiza".into(),
                        year: 2021,
                        features: vec!["GPS".into()],
                    },
                    Car {
                        id: 2,
                        make: "Seat".into(),
                        model: "Leon".into(),
                        year: 2022,
                        features: vec![],
                    },
                ],
                total: 2,
                favorites: FavoriteSet::from_ids([1]),
                loading: false,
            },
            page: 1,
            total_pages: 1,
            controls: page_controls(1, 1),
            search: String::new(),
        };

        let text = page.render();
        assert!(text.contains("[1] Seat Ibiza (2021) ♥ - GPS"));
        assert!(text.contains("[2] Seat Leon (2022)"));
        assert!(!text.contains("Leon (2022) ♥"));
    }
}
