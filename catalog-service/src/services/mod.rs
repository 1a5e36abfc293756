//! Backing services for catalog-service.

pub mod database;
pub mod memory;
pub mod metrics;
pub mod postgres;
pub mod store;

pub use database::Database;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{CatalogStore, GrantStore};
