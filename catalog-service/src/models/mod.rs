//! Domain models for catalog-service.

mod actor;
mod genre;
mod movie;
mod review;

pub use actor::{Actor, CreateActor, UpdateActor};
pub use genre::{CreateGenre, Genre, UpdateGenre};
pub use movie::{CreateMovie, Movie, UpdateMovie};
pub use review::{CreateReview, Review, UpdateReview};

/// Cursor-free pagination used by every list endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u64,
    pub page_size: u64,
}

impl Page {
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}
