use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Movie record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub movie_id: Uuid,
    pub title: String,
    pub release_year: i32,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating a movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub release_year: i32,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
}
