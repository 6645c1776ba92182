//! Storage backend implementations.
//!
//! This module provides concrete implementations of
//! [`GameRepository`](gamehaven_core::storage::GameRepository).
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend is always compiled. The server picks SQLite when the
//! feature is enabled and a database path is configured.
//!
//! # Examples
//!
//! Build without SQLite:
//! ```bash
//! cargo build -p gamehaven --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
