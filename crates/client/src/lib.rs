//! gamehaven_client - HTTP client, query cache and CLI for the gamehaven API.

pub mod cache;
pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use cache::{GameQueryCache, QueryState};
pub use client::{GameApi, GameHavenClient};
pub use error::{ClientError, FetchError, Result};
