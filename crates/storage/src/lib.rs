//! Storage layer for contactbook
//!
//! Contact store adapters behind the [`ContactStore`] trait: an in-memory
//! store and, with the `postgres` feature, a PostgreSQL store.

mod backend;
mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::ContactStore;
