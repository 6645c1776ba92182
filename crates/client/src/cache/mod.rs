//! Client-side query cache.
//!
//! [`GameQueryCache`] sits between a view and a [`GameApi`](crate::GameApi):
//!
//! - concurrent requests for the same [`QueryKey`] share one in-flight fetch
//!   and observe the same outcome
//! - successful results are kept in an LRU keyed by [`QueryKey`]
//! - creating a game invalidates every cached list, whatever its filter
//! - [`GameQueryCache::clear`] drops everything, including in-flight
//!   bookkeeping; fetches started earlier never write back
//!
//! [`QueryKey`]: gamehaven_core::cache::QueryKey

mod query;
mod state;

pub use query::{GameQueryCache, DEFAULT_CAPACITY};
pub use state::QueryState;
