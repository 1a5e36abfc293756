use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Actor record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    pub actor_id: Uuid,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub created_utc: DateTime<Utc>,
}

/// Input for creating an actor.
#[derive(Debug, Clone)]
pub struct CreateActor {
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
}
