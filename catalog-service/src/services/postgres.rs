//! Postgres-backed catalog and grant stores.

use crate::authz::{Action, Grant, GrantSet, Resource};
use crate::models::{
    Actor, CreateActor, CreateGenre, CreateMovie, CreateReview, Genre, Movie, Page, Review,
    UpdateActor, UpdateGenre, UpdateMovie, UpdateReview,
};
use crate::services::database::Database;
use crate::services::metrics::DB_QUERY_DURATION;
use crate::services::store::{CatalogStore, GrantStore};
use async_trait::async_trait;
use service_core::error::AppError;
use sqlx::FromRow;
use tracing::instrument;
use uuid::Uuid;

/// Catalog store backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    db: Database,
}

impl PgStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    async fn count(&self, table: &str) -> Result<u64, AppError> {
        // Table names come from a fixed set below, never from input.
        let (total,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(self.db.pool())
            .await?;
        Ok(total as u64)
    }
}

/// Raw grant row; resource and action are parsed leniently so a stale row
/// can never widen access or fail the whole lookup.
#[derive(Debug, FromRow)]
struct GrantRow {
    resource: String,
    action: String,
}

#[async_trait]
impl GrantStore for PgStore {
    #[instrument(skip(self))]
    async fn grants_for(&self, user_id: &str) -> Result<GrantSet, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["grants_for"])
            .start_timer();

        let rows: Vec<GrantRow> = sqlx::query_as(
            "SELECT resource, action FROM permission_grants WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        timer.observe_duration();

        let grants = rows.into_iter().filter_map(|row| {
            match (Resource::parse(&row.resource), Action::parse(&row.action)) {
                (Some(resource), Some(action)) => Some(Grant::new(resource, action)),
                _ => {
                    tracing::warn!(
                        resource = %row.resource,
                        action = %row.action,
                        "Skipping unrecognized grant row"
                    );
                    None
                }
            }
        });

        Ok(GrantSet::new(grants))
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    // ---------------------------------------------------------------------
    // Actors
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn list_actors(&self, page: Page) -> Result<(Vec<Actor>, u64), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_actors"])
            .start_timer();

        let total = self.count("actors").await?;
        let actors = sqlx::query_as::<_, Actor>(
            r#"
            SELECT actor_id, name, birth_date, bio, created_utc
            FROM actors
            ORDER BY created_utc DESC, actor_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip() as i64)
        .bind(page.page_size as i64)
        .fetch_all(self.db.pool())
        .await?;

        timer.observe_duration();
        Ok((actors, total))
    }

    #[instrument(skip(self))]
    async fn get_actor(&self, actor_id: Uuid) -> Result<Option<Actor>, AppError> {
        let actor = sqlx::query_as::<_, Actor>(
            "SELECT actor_id, name, birth_date, bio, created_utc FROM actors WHERE actor_id = $1",
        )
        .bind(actor_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(actor)
    }

    #[instrument(skip(self, input))]
    async fn create_actor(&self, input: CreateActor) -> Result<Actor, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_actor"])
            .start_timer();

        let actor = sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actors (actor_id, name, birth_date, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING actor_id, name, birth_date, bio, created_utc
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(input.birth_date)
        .bind(&input.bio)
        .fetch_one(self.db.pool())
        .await?;

        timer.observe_duration();
        tracing::info!(actor_id = %actor.actor_id, "Actor created");
        Ok(actor)
    }

    #[instrument(skip(self, input))]
    async fn update_actor(
        &self,
        actor_id: Uuid,
        input: UpdateActor,
    ) -> Result<Option<Actor>, AppError> {
        let actor = sqlx::query_as::<_, Actor>(
            r#"
            UPDATE actors
            SET name = COALESCE($2, name),
                birth_date = COALESCE($3, birth_date),
                bio = COALESCE($4, bio)
            WHERE actor_id = $1
            RETURNING actor_id, name, birth_date, bio, created_utc
            "#,
        )
        .bind(actor_id)
        .bind(&input.name)
        .bind(input.birth_date)
        .bind(&input.bio)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(actor)
    }

    #[instrument(skip(self))]
    async fn delete_actor(&self, actor_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM actors WHERE actor_id = $1")
            .bind(actor_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---------------------------------------------------------------------
    // Movies
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn list_movies(&self, page: Page) -> Result<(Vec<Movie>, u64), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_movies"])
            .start_timer();

        let total = self.count("movies").await?;
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT movie_id, title, release_year, genre_id, synopsis, created_utc
            FROM movies
            ORDER BY created_utc DESC, movie_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip() as i64)
        .bind(page.page_size as i64)
        .fetch_all(self.db.pool())
        .await?;

        timer.observe_duration();
        Ok((movies, total))
    }

    #[instrument(skip(self))]
    async fn get_movie(&self, movie_id: Uuid) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT movie_id, title, release_year, genre_id, synopsis, created_utc
            FROM movies WHERE movie_id = $1
            "#,
        )
        .bind(movie_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(movie)
    }

    #[instrument(skip(self, input))]
    async fn create_movie(&self, input: CreateMovie) -> Result<Movie, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_movie"])
            .start_timer();

        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (movie_id, title, release_year, genre_id, synopsis)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING movie_id, title, release_year, genre_id, synopsis, created_utc
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.title)
        .bind(input.release_year)
        .bind(input.genre_id)
        .bind(&input.synopsis)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest(anyhow::anyhow!("Referenced genre does not exist"))
            }
            other => AppError::from(other),
        })?;

        timer.observe_duration();
        tracing::info!(movie_id = %movie.movie_id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    #[instrument(skip(self, input))]
    async fn update_movie(
        &self,
        movie_id: Uuid,
        input: UpdateMovie,
    ) -> Result<Option<Movie>, AppError> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET title = COALESCE($2, title),
                release_year = COALESCE($3, release_year),
                genre_id = COALESCE($4, genre_id),
                synopsis = COALESCE($5, synopsis)
            WHERE movie_id = $1
            RETURNING movie_id, title, release_year, genre_id, synopsis, created_utc
            "#,
        )
        .bind(movie_id)
        .bind(&input.title)
        .bind(input.release_year)
        .bind(input.genre_id)
        .bind(&input.synopsis)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn delete_movie(&self, movie_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM movies WHERE movie_id = $1")
            .bind(movie_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---------------------------------------------------------------------
    // Genres
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn list_genres(&self, page: Page) -> Result<(Vec<Genre>, u64), AppError> {
        let total = self.count("genres").await?;
        let genres = sqlx::query_as::<_, Genre>(
            r#"
            SELECT genre_id, name, created_utc
            FROM genres
            ORDER BY created_utc DESC, genre_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip() as i64)
        .bind(page.page_size as i64)
        .fetch_all(self.db.pool())
        .await?;
        Ok((genres, total))
    }

    #[instrument(skip(self))]
    async fn get_genre(&self, genre_id: Uuid) -> Result<Option<Genre>, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT genre_id, name, created_utc FROM genres WHERE genre_id = $1",
        )
        .bind(genre_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(genre)
    }

    #[instrument(skip(self, input))]
    async fn create_genre(&self, input: CreateGenre) -> Result<Genre, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (genre_id, name)
            VALUES ($1, $2)
            RETURNING genre_id, name, created_utc
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(anyhow::anyhow!("Genre '{}' already exists", input.name))
            }
            other => AppError::from(other),
        })?;

        tracing::info!(genre_id = %genre.genre_id, name = %genre.name, "Genre created");
        Ok(genre)
    }

    #[instrument(skip(self, input))]
    async fn update_genre(
        &self,
        genre_id: Uuid,
        input: UpdateGenre,
    ) -> Result<Option<Genre>, AppError> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = COALESCE($2, name)
            WHERE genre_id = $1
            RETURNING genre_id, name, created_utc
            "#,
        )
        .bind(genre_id)
        .bind(&input.name)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(anyhow::anyhow!("Genre name already in use"))
            }
            other => AppError::from(other),
        })?;
        Ok(genre)
    }

    #[instrument(skip(self))]
    async fn delete_genre(&self, genre_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM genres WHERE genre_id = $1")
            .bind(genre_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // ---------------------------------------------------------------------
    // Reviews
    // ---------------------------------------------------------------------

    #[instrument(skip(self))]
    async fn list_reviews(&self, page: Page) -> Result<(Vec<Review>, u64), AppError> {
        let total = self.count("reviews").await?;
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, movie_id, author, rating, comment, created_utc
            FROM reviews
            ORDER BY created_utc DESC, review_id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(page.skip() as i64)
        .bind(page.page_size as i64)
        .fetch_all(self.db.pool())
        .await?;
        Ok((reviews, total))
    }

    #[instrument(skip(self))]
    async fn get_review(&self, review_id: Uuid) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, movie_id, author, rating, comment, created_utc
            FROM reviews WHERE review_id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(review)
    }

    #[instrument(skip(self, input))]
    async fn create_review(&self, input: CreateReview) -> Result<Review, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (review_id, movie_id, author, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING review_id, movie_id, author, rating, comment, created_utc
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.movie_id)
        .bind(&input.author)
        .bind(input.rating)
        .bind(&input.comment)
        .fetch_one(self.db.pool())
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest(anyhow::anyhow!("Reviewed movie does not exist"))
            }
            other => AppError::from(other),
        })?;

        tracing::info!(review_id = %review.review_id, movie_id = %review.movie_id, "Review created");
        Ok(review)
    }

    #[instrument(skip(self, input))]
    async fn update_review(
        &self,
        review_id: Uuid,
        input: UpdateReview,
    ) -> Result<Option<Review>, AppError> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews
            SET rating = COALESCE($2, rating),
                comment = COALESCE($3, comment)
            WHERE review_id = $1
            RETURNING review_id, movie_id, author, rating, comment, created_utc
            "#,
        )
        .bind(review_id)
        .bind(input.rating)
        .bind(&input.comment)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(review)
    }

    #[instrument(skip(self))]
    async fn delete_review(&self, review_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
