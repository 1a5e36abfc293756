mod actors;
mod genres;
mod health;
mod metrics;
mod movies;
mod reviews;

pub use actors::{create_actor, delete_actor, get_actor, list_actors, update_actor};
pub use genres::{create_genre, delete_genre, get_genre, list_genres, update_genre};
pub use health::health_check;
pub use metrics::metrics;
pub use movies::{create_movie, delete_movie, get_movie, list_movies, update_movie};
pub use reviews::{create_review, delete_review, get_review, list_reviews, update_review};
