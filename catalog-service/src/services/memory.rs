//! In-memory catalog and grant stores.
//!
//! Backend for local runs and the integration test suite; keeps the same
//! observable behavior as the Postgres store (newest-first listings,
//! unique genre names, review-to-movie referential check).

use crate::authz::{Grant, GrantSet, Resource};
use crate::models::{
    Actor, CreateActor, CreateGenre, CreateMovie, CreateReview, Genre, Movie, Page, Review,
    UpdateActor, UpdateGenre, UpdateMovie, UpdateReview,
};
use crate::services::store::{CatalogStore, GrantStore};
use async_trait::async_trait;
use chrono::Utc;
use service_core::error::AppError;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    reviews: Vec<Review>,
    grants: HashMap<String, HashSet<Grant>>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a grant for a principal. Stands in for the external
    /// administrative provisioning path.
    pub async fn add_grant(&self, user_id: &str, resource: Resource, action: crate::authz::Action) {
        let mut inner = self.inner.write().await;
        inner
            .grants
            .entry(user_id.to_string())
            .or_default()
            .insert(Grant::new(resource, action));
    }

    pub async fn clear_grants(&self, user_id: &str) {
        let mut inner = self.inner.write().await;
        inner.grants.remove(user_id);
    }
}

/// Newest-first page over an insertion-ordered vec.
fn paginate<T: Clone>(items: &[T], page: Page) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let page_items = items
        .iter()
        .rev()
        .skip(page.skip() as usize)
        .take(page.page_size as usize)
        .cloned()
        .collect();
    (page_items, total)
}

#[async_trait]
impl GrantStore for MemoryStore {
    async fn grants_for(&self, user_id: &str) -> Result<GrantSet, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .grants
            .get(user_id)
            .map(|grants| GrantSet::new(grants.iter().copied()))
            .unwrap_or_else(GrantSet::empty))
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_actors(&self, page: Page) -> Result<(Vec<Actor>, u64), AppError> {
        let inner = self.inner.read().await;
        Ok(paginate(&inner.actors, page))
    }

    async fn get_actor(&self, actor_id: Uuid) -> Result<Option<Actor>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.actors.iter().find(|a| a.actor_id == actor_id).cloned())
    }

    async fn create_actor(&self, input: CreateActor) -> Result<Actor, AppError> {
        let actor = Actor {
            actor_id: Uuid::new_v4(),
            name: input.name,
            birth_date: input.birth_date,
            bio: input.bio,
            created_utc: Utc::now(),
        };
        let mut inner = self.inner.write().await;
        inner.actors.push(actor.clone());
        Ok(actor)
    }

    async fn update_actor(
        &self,
        actor_id: Uuid,
        input: UpdateActor,
    ) -> Result<Option<Actor>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(actor) = inner.actors.iter_mut().find(|a| a.actor_id == actor_id) else {
            return Ok(None);
        };
        if let Some(name) = input.name {
            actor.name = name;
        }
        if let Some(birth_date) = input.birth_date {
            actor.birth_date = Some(birth_date);
        }
        if let Some(bio) = input.bio {
            actor.bio = Some(bio);
        }
        Ok(Some(actor.clone()))
    }

    async fn delete_actor(&self, actor_id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.actors.len();
        inner.actors.retain(|a| a.actor_id != actor_id);
        Ok(inner.actors.len() < before)
    }

    async fn list_movies(&self, page: Page) -> Result<(Vec<Movie>, u64), AppError> {
        let inner = self.inner.read().await;
        Ok(paginate(&inner.movies, page))
    }

    async fn get_movie(&self, movie_id: Uuid) -> Result<Option<Movie>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.movies.iter().find(|m| m.movie_id == movie_id).cloned())
    }

    async fn create_movie(&self, input: CreateMovie) -> Result<Movie, AppError> {
        let mut inner = self.inner.write().await;
        if let Some(genre_id) = input.genre_id {
            if !inner.genres.iter().any(|g| g.genre_id == genre_id) {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "Referenced genre does not exist"
                )));
            }
        }
        let movie = Movie {
            movie_id: Uuid::new_v4(),
            title: input.title,
            release_year: input.release_year,
            genre_id: input.genre_id,
            synopsis: input.synopsis,
            created_utc: Utc::now(),
        };
        inner.movies.push(movie.clone());
        Ok(movie)
    }

    async fn update_movie(
        &self,
        movie_id: Uuid,
        input: UpdateMovie,
    ) -> Result<Option<Movie>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.movies.iter().position(|m| m.movie_id == movie_id) else {
            return Ok(None);
        };
        if let Some(genre_id) = input.genre_id {
            if !inner.genres.iter().any(|g| g.genre_id == genre_id) {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "Referenced genre does not exist"
                )));
            }
        }
        let movie = &mut inner.movies[index];
        if let Some(title) = input.title {
            movie.title = title;
        }
        if let Some(release_year) = input.release_year {
            movie.release_year = release_year;
        }
        if let Some(genre_id) = input.genre_id {
            movie.genre_id = Some(genre_id);
        }
        if let Some(synopsis) = input.synopsis {
            movie.synopsis = Some(synopsis);
        }
        Ok(Some(movie.clone()))
    }

    async fn delete_movie(&self, movie_id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.movies.len();
        inner.movies.retain(|m| m.movie_id != movie_id);
        let deleted = inner.movies.len() < before;
        if deleted {
            // Mirror the ON DELETE CASCADE on reviews.movie_id.
            inner.reviews.retain(|r| r.movie_id != movie_id);
        }
        Ok(deleted)
    }

    async fn list_genres(&self, page: Page) -> Result<(Vec<Genre>, u64), AppError> {
        let inner = self.inner.read().await;
        Ok(paginate(&inner.genres, page))
    }

    async fn get_genre(&self, genre_id: Uuid) -> Result<Option<Genre>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.genres.iter().find(|g| g.genre_id == genre_id).cloned())
    }

    async fn create_genre(&self, input: CreateGenre) -> Result<Genre, AppError> {
        let mut inner = self.inner.write().await;
        if inner.genres.iter().any(|g| g.name == input.name) {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "Genre '{}' already exists",
                input.name
            )));
        }
        let genre = Genre {
            genre_id: Uuid::new_v4(),
            name: input.name,
            created_utc: Utc::now(),
        };
        inner.genres.push(genre.clone());
        Ok(genre)
    }

    async fn update_genre(
        &self,
        genre_id: Uuid,
        input: UpdateGenre,
    ) -> Result<Option<Genre>, AppError> {
        let mut inner = self.inner.write().await;
        if let Some(ref name) = input.name {
            if inner
                .genres
                .iter()
                .any(|g| g.name == *name && g.genre_id != genre_id)
            {
                return Err(AppError::Conflict(anyhow::anyhow!(
                    "Genre name already in use"
                )));
            }
        }
        let Some(genre) = inner.genres.iter_mut().find(|g| g.genre_id == genre_id) else {
            return Ok(None);
        };
        if let Some(name) = input.name {
            genre.name = name;
        }
        Ok(Some(genre.clone()))
    }

    async fn delete_genre(&self, genre_id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.genres.len();
        inner.genres.retain(|g| g.genre_id != genre_id);
        let deleted = inner.genres.len() < before;
        if deleted {
            // Mirror ON DELETE SET NULL on movies.genre_id.
            for movie in inner.movies.iter_mut() {
                if movie.genre_id == Some(genre_id) {
                    movie.genre_id = None;
                }
            }
        }
        Ok(deleted)
    }

    async fn list_reviews(&self, page: Page) -> Result<(Vec<Review>, u64), AppError> {
        let inner = self.inner.read().await;
        Ok(paginate(&inner.reviews, page))
    }

    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .reviews
            .iter()
            .find(|r| r.review_id == review_id)
            .cloned())
    }

    async fn create_review(&self, input: CreateReview) -> Result<Review, AppError> {
        let mut inner = self.inner.write().await;
        if !inner.movies.iter().any(|m| m.movie_id == input.movie_id) {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Reviewed movie does not exist"
            )));
        }
        let review = Review {
            review_id: Uuid::new_v4(),
            movie_id: input.movie_id,
            author: input.author,
            rating: input.rating,
            comment: input.comment,
            created_utc: Utc::now(),
        };
        inner.reviews.push(review.clone());
        Ok(review)
    }

    async fn update_review(
        &self,
        review_id: Uuid,
        input: UpdateReview,
    ) -> Result<Option<Review>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(review) = inner.reviews.iter_mut().find(|r| r.review_id == review_id) else {
            return Ok(None);
        };
        if let Some(rating) = input.rating {
            review.rating = rating;
        }
        if let Some(comment) = input.comment {
            review.comment = Some(comment);
        }
        Ok(Some(review.clone()))
    }

    async fn delete_review(&self, review_id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.reviews.len();
        inner.reviews.retain(|r| r.review_id != review_id);
        Ok(inner.reviews.len() < before)
    }
}
