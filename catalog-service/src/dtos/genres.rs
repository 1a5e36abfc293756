use crate::models::{CreateGenre, Genre, UpdateGenre};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

impl CreateGenreRequest {
    pub fn into_input(self) -> CreateGenre {
        CreateGenre { name: self.name }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGenreRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
}

impl UpdateGenreRequest {
    pub fn into_input(self) -> UpdateGenre {
        UpdateGenre { name: self.name }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

impl From<Genre> for GenreResponse {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.genre_id,
            name: genre.name,
            created_at: genre.created_utc.to_rfc3339(),
        }
    }
}
