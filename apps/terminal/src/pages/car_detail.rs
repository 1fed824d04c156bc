//! # Car Detail Page
//!
//! One car with its reviews. The rating summary is recomputed client-side
//! from the fetched list after every add/edit/delete, so the header never
//! lags the reviews below it.

use std::fmt::Write as _;

use rideline_api::{CarsApi, ReviewsApi};
use rideline_core::rating::{summarize, ReviewSummary};
use rideline_core::validation::validate_rating;
use rideline_core::{Car, Review, ReviewDraft};

use crate::error::AppError;
use crate::state::SessionState;

/// The car-detail screen's view data.
#[derive(Debug, Clone)]
pub struct CarDetailPage {
    pub car: Car,
    pub reviews: Vec<Review>,
    pub summary: ReviewSummary,
}

impl CarDetailPage {
    /// Loads the car and its reviews.
    pub async fn load(
        cars: &CarsApi,
        reviews: &ReviewsApi,
        car_id: i64,
    ) -> Result<CarDetailPage, AppError> {
        let car = cars.get(car_id).await?;
        let page = reviews.for_car(car_id).await?;
        let summary = summarize(&page.reviews);
        Ok(CarDetailPage {
            car,
            reviews: page.reviews,
            summary,
        })
    }

    /// Plain-text rendering for the CLI.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({})",
            self.car.display_name(),
            self.car.year
        );

        if !self.car.features.is_empty() {
            let _ = writeln!(out, "Features: {}", self.car.features.join(", "));
        }

        let _ = writeln!(out, "Rating: {}", self.summary.label());

        for review in &self.reviews {
            let _ = writeln!(
                out,
                "  {}* {} - {}",
                review.rating, review.username, review.text
            );
        }
        if self.reviews.is_empty() {
            let _ = writeln!(out, "  No reviews for this car yet. Be the first!");
        }

        out
    }
}

/// Publishes (or edits) a review. Signed-out users are stopped before any
/// request; the rating is range-checked client-side like the form did.
pub async fn submit_review(
    reviews: &ReviewsApi,
    session: &SessionState,
    draft: &ReviewDraft,
    editing: Option<i64>,
) -> Result<Review, AppError> {
    if !session.is_authenticated() {
        return Err(AppError::unauthenticated(
            "You must sign in to write a review",
        ));
    }
    validate_rating(draft.rating)?;

    let review = match editing {
        Some(review_id) => reviews.update(review_id, draft).await?,
        None => reviews.create(draft).await?,
    };
    Ok(review)
}

/// Deletes one of the user's reviews.
pub async fn remove_review(
    reviews: &ReviewsApi,
    session: &SessionState,
    review_id: i64,
) -> Result<(), AppError> {
    if !session.is_authenticated() {
        return Err(AppError::unauthenticated(
            "You must sign in to delete a review",
        ));
    }

    let outcome = reviews.delete(review_id).await?;
    if !outcome.success {
        return Err(AppError::backend(outcome.message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rideline_core::Session;

    use crate::error::ErrorCode;
    use crate::state::SessionStore;

    fn page() -> CarDetailPage {
        let reviews = vec![
            Review {
                id: 1,
                car_id: 7,
                username: "yu@yu.com".into(),
                text: "smooth ride".into(),
                rating: 4,
                date: String::new(),
            },
            Review {
                id: 2,
                car_id: 7,
                username: "ana@cars.es".into(),
                text: "great value".into(),
                rating: 5,
                date: String::new(),
            },
            Review {
                id: 3,
                car_id: 7,
                username: "leo@cars.es".into(),
                text: "noisy".into(),
                rating: 3,
                date: String::new(),
            },
        ];
        CarDetailPage {
            car: Car {
                id: 7,
                make: "Seat".into(),
                model: "Ibiza".into(),
                year: 2021,
                features: vec!["GPS".into()],
            },
            summary: summarize(&reviews),
            reviews,
        }
    }

    #[test]
    fn test_summary_recomputed_from_list() {
        let page = page();
        assert_eq!(page.summary.avg_rating, 4.0);
        assert_eq!(page.summary.total, 3);
    }

    #[test]
    fn test_render_shows_rating_and_reviews() {
        let text = page().render();
        assert!(text.contains("Seat Ibiza (2021)"));
        assert!(text.contains("Rating: 4.0 (3)"));
        assert!(text.contains("5* ana@cars.es - great value"));
    }

    #[tokio::test]
    async fn test_submit_review_requires_session() {
        let reviews = ReviewsApi::new(test_client());
        let session = SessionState::new(SessionStore::ephemeral());
        let draft = ReviewDraft {
            car_id: 7,
            text: "nice".into(),
            rating: 4,
        };

        let err = submit_review(&reviews, &session, &draft, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthenticated);
    }

    #[tokio::test]
    async fn test_submit_review_checks_rating_before_network() {
        let reviews = ReviewsApi::new(test_client());
        let session = SessionState::new(SessionStore::ephemeral());
        session.login(Session {
            token: "tok".into(),
            username: "yu@yu.com".into(),
            is_admin: false,
        });
        let draft = ReviewDraft {
            car_id: 7,
            text: "nice".into(),
            rating: 9,
        };

        let err = submit_review(&reviews, &session, &draft, None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
    }

    fn test_client() -> rideline_api::ApiClient {
        rideline_api::ApiClient::new(&rideline_api::ApiConfig::default()).unwrap()
    }
}
