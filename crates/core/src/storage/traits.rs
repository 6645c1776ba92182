use async_trait::async_trait;

use crate::catalog::{Game, GameFilter, NewGame};

use super::Result;

/// Repository for game records.
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Persists a candidate, assigning its id and creation timestamp.
    async fn insert_game(&self, game: NewGame) -> Result<Game>;

    /// Gets a game by its ID. A missing id is `Ok(None)`, not an error.
    async fn get_game(&self, id: i64) -> Result<Option<Game>>;

    /// Gets every game matching the filter, in catalog order.
    async fn query_games(&self, filter: &GameFilter) -> Result<Vec<Game>>;

    /// Inserts `games` in order only if the store holds no records.
    ///
    /// The emptiness check and the inserts happen under one lock or
    /// transaction. Returns how many records were inserted.
    async fn seed_if_empty(&self, games: Vec<NewGame>) -> Result<usize>;

    /// Counts stored games.
    async fn count_games(&self) -> Result<usize>;
}
