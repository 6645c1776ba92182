//! In-memory storage backend.
//!
//! Stores every game in a `Vec` wrapped in `Arc<RwLock<_>>`. Used by tests and
//! by the server when no database is configured. Data is lost on restart.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamehaven::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.seed_if_empty(seed_games()).await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
