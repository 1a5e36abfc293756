//! Request and response DTOs.

mod actors;
mod genres;
mod movies;
mod reviews;

pub use actors::{ActorResponse, CreateActorRequest, UpdateActorRequest};
pub use genres::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
pub use movies::{CreateMovieRequest, MovieResponse, UpdateMovieRequest};
pub use reviews::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};

use crate::models::Page;
use serde::{Deserialize, Serialize};

/// Query parameters shared by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl ListParams {
    /// Clamp to sane bounds: page >= 1 (capped so the SQL offset stays in
    /// i64 range), 1 <= page_size <= 100, default 20.
    pub fn to_page(&self) -> Page {
        Page {
            page: self.page.unwrap_or(1).clamp(1, u32::MAX as u64),
            page_size: self.page_size.unwrap_or(20).clamp(1, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_page_applies_defaults_and_bounds() {
        let params = ListParams {
            page: None,
            page_size: None,
        };
        let page = params.to_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 20);

        let params = ListParams {
            page: Some(0),
            page_size: Some(10_000),
        };
        let page = params.to_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }

    #[test]
    fn to_page_caps_huge_page_numbers() {
        let params = ListParams {
            page: Some(u64::MAX),
            page_size: Some(100),
        };
        let page = params.to_page();
        assert_eq!(page.page, u32::MAX as u64);
        assert!(i64::try_from(page.skip()).is_ok());
    }
}

/// Envelope for paginated list responses.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: u64, page: Page) -> Self {
        let total_pages = total.div_ceil(page.page_size);
        Self {
            items,
            total,
            page: page.page,
            page_size: page.page_size,
            total_pages,
        }
    }
}
