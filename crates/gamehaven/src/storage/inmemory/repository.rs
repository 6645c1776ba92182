//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use gamehaven_core::catalog::{
    filter_games, next_created_at, sort_games, Game, GameFilter, NewGame,
};
use gamehaven_core::storage::{GameRepository, Result};

/// Rows plus the id counter. Ids start at 1 and are never reused.
#[derive(Debug)]
struct GameTable {
    rows: Vec<Game>,
    next_id: i64,
    last_created_at: Option<DateTime<Utc>>,
}

impl GameTable {
    fn insert(&mut self, game: NewGame) -> Game {
        let created_at = next_created_at(self.last_created_at, Utc::now());
        let stored = game.into_game(self.next_id, created_at);

        self.next_id += 1;
        self.last_created_at = Some(created_at);
        self.rows.push(stored.clone());
        stored
    }
}

impl Default for GameTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
            last_created_at: None,
        }
    }
}

/// In-memory storage backend.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    games: Arc<RwLock<GameTable>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryRepository {
    async fn insert_game(&self, game: NewGame) -> Result<Game> {
        let mut table = self.games.write().await;
        Ok(table.insert(game))
    }

    async fn get_game(&self, id: i64) -> Result<Option<Game>> {
        let table = self.games.read().await;
        Ok(table.rows.iter().find(|g| g.id == id).cloned())
    }

    async fn query_games(&self, filter: &GameFilter) -> Result<Vec<Game>> {
        let table = self.games.read().await;
        let mut games: Vec<Game> = filter_games(&table.rows, filter)
            .into_iter()
            .cloned()
            .collect();
        sort_games(&mut games);
        Ok(games)
    }

    async fn seed_if_empty(&self, games: Vec<NewGame>) -> Result<usize> {
        let mut table = self.games.write().await;
        if !table.rows.is_empty() {
            return Ok(0);
        }

        let inserted = games.len();
        for game in games {
            table.insert(game);
        }
        Ok(inserted)
    }

    async fn count_games(&self) -> Result<usize> {
        Ok(self.games.read().await.rows.len())
    }
}
