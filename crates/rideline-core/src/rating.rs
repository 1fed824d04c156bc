//! # Review Aggregation
//!
//! Derives the average rating shown on car cards and the detail page.
//!
//! The backend returns a precomputed `avgRating`, but the client recomputes
//! after every local add/edit/delete so the summary never lags the list.

use crate::types::Review;

/// The derived rating summary for one car.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReviewSummary {
    /// Mean rating rounded to one decimal; 0.0 when there are no reviews.
    pub avg_rating: f64,
    /// Number of reviews that went into the mean.
    pub total: usize,
}

impl ReviewSummary {
    /// Display form, e.g. "4.0 (3)" or "No reviews yet".
    pub fn label(&self) -> String {
        if self.total == 0 {
            "No reviews yet".to_string()
        } else {
            format!("{:.1} ({})", self.avg_rating, self.total)
        }
    }
}

/// Computes sum/count over `reviews`, rounded to one decimal.
pub fn summarize(reviews: &[Review]) -> ReviewSummary {
    if reviews.is_empty() {
        return ReviewSummary::default();
    }

    let sum: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    let avg = sum as f64 / reviews.len() as f64;

    ReviewSummary {
        avg_rating: (avg * 10.0).round() / 10.0,
        total: reviews.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: i64::from(rating),
            car_id: 1,
            username: "yu@yu.com".into(),
            text: "ok".into(),
            rating,
            date: String::new(),
        }
    }

    #[test]
    fn test_average_of_4_5_3_is_4_0() {
        let reviews = vec![review(4), review(5), review(3)];
        let summary = summarize(&reviews);
        assert_eq!(summary.avg_rating, 4.0);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.label(), "4.0 (3)");
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // (4 + 4 + 5) / 3 = 4.333... → 4.3
        let summary = summarize(&[review(4), review(4), review(5)]);
        assert_eq!(summary.avg_rating, 4.3);
    }

    #[test]
    fn test_empty_reviews_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.avg_rating, 0.0);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.label(), "No reviews yet");
    }
}
