use crate::models::{Actor, CreateActor, UpdateActor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateActorRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
}

impl CreateActorRequest {
    pub fn into_input(self) -> CreateActor {
        CreateActor {
            name: self.name,
            birth_date: self.birth_date,
            bio: self.bio,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateActorRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
}

impl UpdateActorRequest {
    pub fn into_input(self) -> UpdateActor {
        UpdateActor {
            name: self.name,
            birth_date: self.birth_date,
            bio: self.bio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub id: Uuid,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub bio: Option<String>,
    pub created_at: String,
}

impl From<Actor> for ActorResponse {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.actor_id,
            name: actor.name,
            birth_date: actor.birth_date,
            bio: actor.bio,
            created_at: actor.created_utc.to_rfc3339(),
        }
    }
}
