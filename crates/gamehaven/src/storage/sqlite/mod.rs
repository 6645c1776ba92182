//! SQLite storage backend.
//!
//! Implements [`GameRepository`] with `rusqlite`, run on a background thread
//! through `tokio-rusqlite`. Compiled with the `sqlite` feature.
//!
//! [`GameRepository`]: gamehaven_core::storage::GameRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
