//! Data-access interfaces.
//!
//! Handlers and the permission middleware only see these traits; the
//! concrete backend (Postgres in production, in-memory for tests and local
//! runs) is chosen at startup from configuration.

use crate::authz::GrantSet;
use crate::models::{
    Actor, CreateActor, CreateGenre, CreateMovie, CreateReview, Genre, Movie, Page, Review,
    UpdateActor, UpdateGenre, UpdateMovie, UpdateReview,
};
use async_trait::async_trait;
use service_core::error::AppError;
use uuid::Uuid;

/// Read-only access to the grant table. Grants are provisioned externally;
/// the service never writes them.
#[async_trait]
pub trait GrantStore: Send + Sync {
    /// Load the grant snapshot for one principal. Errors are surfaced to
    /// the caller, which must treat them as a deny.
    async fn grants_for(&self, user_id: &str) -> Result<GrantSet, AppError>;
}

/// CRUD access to the catalog resources. List operations return the page
/// of records plus the total count.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_actors(&self, page: Page) -> Result<(Vec<Actor>, u64), AppError>;
    async fn get_actor(&self, actor_id: Uuid) -> Result<Option<Actor>, AppError>;
    async fn create_actor(&self, input: CreateActor) -> Result<Actor, AppError>;
    async fn update_actor(&self, actor_id: Uuid, input: UpdateActor)
        -> Result<Option<Actor>, AppError>;
    async fn delete_actor(&self, actor_id: Uuid) -> Result<bool, AppError>;

    async fn list_movies(&self, page: Page) -> Result<(Vec<Movie>, u64), AppError>;
    async fn get_movie(&self, movie_id: Uuid) -> Result<Option<Movie>, AppError>;
    async fn create_movie(&self, input: CreateMovie) -> Result<Movie, AppError>;
    async fn update_movie(&self, movie_id: Uuid, input: UpdateMovie)
        -> Result<Option<Movie>, AppError>;
    async fn delete_movie(&self, movie_id: Uuid) -> Result<bool, AppError>;

    async fn list_genres(&self, page: Page) -> Result<(Vec<Genre>, u64), AppError>;
    async fn get_genre(&self, genre_id: Uuid) -> Result<Option<Genre>, AppError>;
    async fn create_genre(&self, input: CreateGenre) -> Result<Genre, AppError>;
    async fn update_genre(&self, genre_id: Uuid, input: UpdateGenre)
        -> Result<Option<Genre>, AppError>;
    async fn delete_genre(&self, genre_id: Uuid) -> Result<bool, AppError>;

    async fn list_reviews(&self, page: Page) -> Result<(Vec<Review>, u64), AppError>;
    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, AppError>;
    async fn create_review(&self, input: CreateReview) -> Result<Review, AppError>;
    async fn update_review(
        &self,
        review_id: Uuid,
        input: UpdateReview,
    ) -> Result<Option<Review>, AppError>;
    async fn delete_review(&self, review_id: Uuid) -> Result<bool, AppError>;
}
