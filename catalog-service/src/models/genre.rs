use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Genre record. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Genre {
    pub genre_id: Uuid,
    pub name: String,
    pub created_utc: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateGenre {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGenre {
    pub name: Option<String>,
}
