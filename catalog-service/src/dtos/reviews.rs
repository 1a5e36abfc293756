use crate::models::{CreateReview, Review, UpdateReview};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Authorship is taken from the authenticated principal, not the body.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub movie_id: Uuid,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

impl CreateReviewRequest {
    pub fn into_input(self, author: String) -> CreateReview {
        CreateReview {
            movie_id: self.movie_id,
            author,
            rating: self.rating,
            comment: self.comment,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

impl UpdateReviewRequest {
    pub fn into_input(self) -> UpdateReview {
        UpdateReview {
            rating: self.rating,
            comment: self.comment,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub author: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.review_id,
            movie_id: review.movie_id,
            author: review.author,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_utc.to_rfc3339(),
        }
    }
}
