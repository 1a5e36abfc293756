use crate::models::{CreateMovie, Movie, UpdateMovie};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,
    #[validate(range(min = 1888, max = 2100, message = "Release year out of range"))]
    pub release_year: i32,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
}

impl CreateMovieRequest {
    pub fn into_input(self) -> CreateMovie {
        CreateMovie {
            title: self.title,
            release_year: self.release_year,
            genre_id: self.genre_id,
            synopsis: self.synopsis,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,
    #[validate(range(min = 1888, max = 2100, message = "Release year out of range"))]
    pub release_year: Option<i32>,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
}

impl UpdateMovieRequest {
    pub fn into_input(self) -> UpdateMovie {
        UpdateMovie {
            title: self.title,
            release_year: self.release_year,
            genre_id: self.genre_id,
            synopsis: self.synopsis,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub release_year: i32,
    pub genre_id: Option<Uuid>,
    pub synopsis: Option<String>,
    pub created_at: String,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.movie_id,
            title: movie.title,
            release_year: movie.release_year,
            genre_id: movie.genre_id,
            synopsis: movie.synopsis,
            created_at: movie.created_utc.to_rfc3339(),
        }
    }
}
