//! # Review Endpoints
//!
//! Reading is public; create/update/delete require the session token, and
//! the backend enforces that only the author may edit or delete.

use serde::Deserialize;
use tracing::debug;

use rideline_core::{Review, ReviewDraft, ReviewPage};

use crate::client::ApiClient;
use crate::error::ApiResult;

/// Envelope of review create/update responses.
#[derive(Debug, Deserialize)]
struct ReviewEnvelope {
    review: Review,
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
}

/// Outcome of a review deletion.
#[derive(Debug, Deserialize)]
pub struct ReviewDeleted {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Reviews endpoint group.
#[derive(Debug, Clone)]
pub struct ReviewsApi {
    client: ApiClient,
}

impl ReviewsApi {
    pub fn new(client: ApiClient) -> Self {
        ReviewsApi { client }
    }

    /// Every review for one car, with the backend's aggregate.
    pub async fn for_car(&self, car_id: i64) -> ApiResult<ReviewPage> {
        debug!(car_id, "Fetching reviews");
        self.client.get(&format!("reviews/{car_id}"), &[]).await
    }

    /// Publishes a review; the backend stamps author and date.
    pub async fn create(&self, draft: &ReviewDraft) -> ApiResult<Review> {
        debug!(car_id = draft.car_id, rating = draft.rating, "Creating review");
        let envelope: ReviewEnvelope = self.client.post("reviews", draft).await?;
        Ok(envelope.review)
    }

    /// Edits an existing review (author only).
    pub async fn update(&self, review_id: i64, draft: &ReviewDraft) -> ApiResult<Review> {
        debug!(review_id, "Updating review");
        let envelope: ReviewEnvelope = self
            .client
            .put(&format!("reviews/{review_id}"), draft)
            .await?;
        Ok(envelope.review)
    }

    /// Deletes a review (author only).
    pub async fn delete(&self, review_id: i64) -> ApiResult<ReviewDeleted> {
        debug!(review_id, "Deleting review");
        self.client.delete(&format!("reviews/{review_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_envelope_shape() {
        let json = r#"{
            "review": {
                "id": 2, "car_id": 7, "username": "yu@yu.com",
                "text": "smooth ride", "rating": 5, "date": "2024-05-01T10:00:00"
            },
            "success": true
        }"#;
        let envelope: ReviewEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.review.rating, 5);
        assert_eq!(envelope.review.car_id, 7);
    }
}
