use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review record. Rating is 1 to 5 inclusive, enforced at the DTO layer
/// and again by a database check constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub review_id: Uuid,
    pub movie_id: Uuid,
    pub author: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a review.
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub movie_id: Uuid,
    pub author: String,
    pub rating: i16,
    pub comment: Option<String>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateReview {
    pub rating: Option<i16>,
    pub comment: Option<String>,
}
