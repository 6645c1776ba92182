//! SQLite repository implementation.
//!
//! Implements [`GameRepository`] from `gamehaven_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::functions::{Context, FunctionFlags};
use rusqlite::TransactionBehavior;
use tokio_rusqlite::Connection;

use gamehaven_core::catalog::{next_created_at, Game, GameFilter, NewGame};
use gamehaven_core::storage::{GameRepository, RepositoryError, Result};

use super::conversions::{format_datetime, parse_datetime, row_to_game, storage_precision};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Unicode-aware `lower()`. NULL stays NULL.
fn fold_case(ctx: &Context<'_>) -> rusqlite::Result<Option<String>> {
    let text: Option<String> = ctx.get(0)?;
    Ok(text.map(|t| t.to_lowercase()))
}

/// Inserts one row inside an open transaction.
///
/// The timestamp is clamped to the latest stored one so `created_at` never
/// decreases with insertion order.
fn insert_row(conn: &rusqlite::Connection, game: NewGame) -> rusqlite::Result<Game> {
    let latest: Option<String> =
        conn.query_row(schema::SELECT_LATEST_CREATED_AT, [], |row| row.get(0))?;
    let latest = latest.as_deref().map(parse_datetime).transpose()?;
    let created_at = next_created_at(latest, storage_precision(Utc::now()));

    conn.execute(
        schema::INSERT_GAME,
        rusqlite::params![
            game.title,
            game.description,
            game.url,
            game.thumbnail,
            game.game_type,
            game.category,
            game.is_featured,
            format_datetime(&created_at)
        ],
    )?;

    Ok(game.into_game(conn.last_insert_rowid(), created_at))
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Register SQL functions and initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.create_scalar_function(
                schema::FOLD_CASE_FN,
                1,
                FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
                fold_case,
            )
            .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl GameRepository for SqliteRepository {
    async fn insert_game(&self, game: NewGame) -> Result<Game> {
        self.conn
            .call(move |conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Immediate)
                    .map_err(wrap_err)?;
                let stored = insert_row(&tx, game).map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_game(&self, id: i64) -> Result<Option<Game>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_GAME_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_game) {
                    Ok(game) => Ok(Some(game)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn query_games(&self, filter: &GameFilter) -> Result<Vec<Game>> {
        let search = filter.search.clone();
        let category = filter.category.clone();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_GAMES).map_err(wrap_err)?;
                let rows = stmt
                    .query_map(rusqlite::params![search, category], row_to_game)
                    .map_err(wrap_err)?;

                let mut games = Vec::new();
                for row_result in rows {
                    games.push(row_result.map_err(wrap_err)?);
                }
                Ok(games)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn seed_if_empty(&self, games: Vec<NewGame>) -> Result<usize> {
        self.conn
            .call(move |conn| {
                let tx = conn
                    .transaction_with_behavior(TransactionBehavior::Immediate)
                    .map_err(wrap_err)?;

                let existing: i64 = tx
                    .query_row(schema::COUNT_GAMES, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                if existing > 0 {
                    return Ok(0);
                }

                let inserted = games.len();
                for game in games {
                    insert_row(&tx, game).map_err(wrap_err)?;
                }
                tx.commit().map_err(wrap_err)?;
                Ok(inserted)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn count_games(&self) -> Result<usize> {
        self.conn
            .call(|conn| {
                let count: i64 = conn
                    .query_row(schema::COUNT_GAMES, [], |row| row.get(0))
                    .map_err(wrap_err)?;
                Ok(count as usize)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamehaven_core::catalog::seed_games;

    fn candidate(title: &str, category: &str, featured: bool) -> NewGame {
        NewGame::new(title, "desc", "https://example.com", "thumb.png", "html5", category)
            .featured(featured)
    }

    async fn seeded_repo() -> SqliteRepository {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.seed_if_empty(seed_games()).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_insert_assigns_incrementing_ids() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let first = repo.insert_game(candidate("A", "Action", false)).await.unwrap();
        let second = repo.insert_game(candidate("B", "Action", false)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
    }

    #[tokio::test]
    async fn test_inserted_game_round_trips() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        let created = repo.insert_game(candidate("Tetris", "Puzzle", true)).await.unwrap();
        let fetched = repo.get_game(created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_game_is_none() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert_eq!(repo.get_game(404).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();

        assert_eq!(repo.seed_if_empty(seed_games()).await.unwrap(), 7);
        assert_eq!(repo.seed_if_empty(seed_games()).await.unwrap(), 0);
        assert_eq!(repo.count_games().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_seed_skips_non_empty_store() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.insert_game(candidate("Solo", "Arcade", false)).await.unwrap();

        assert_eq!(repo.seed_if_empty(seed_games()).await.unwrap(), 0);
        assert_eq!(repo.count_games().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_query_orders_featured_then_newest() {
        let repo = seeded_repo().await;

        let games = repo.query_games(&GameFilter::new()).await.unwrap();

        assert_eq!(games.len(), 7);
        assert_eq!(games[0].title, "Minecraft Classic");
        let featured: Vec<bool> = games.iter().map(|g| g.is_featured).collect();
        assert_eq!(featured, vec![true, true, true, false, false, false, false]);
    }

    #[tokio::test]
    async fn test_query_by_category_is_exact() {
        let repo = seeded_repo().await;

        let puzzles = repo
            .query_games(&GameFilter::new().with_category("Puzzle"))
            .await
            .unwrap();
        let lowercase = repo
            .query_games(&GameFilter::new().with_category("puzzle"))
            .await
            .unwrap();

        let mut titles: Vec<&str> = puzzles.iter().map(|g| g.title.as_str()).collect();
        titles.sort();
        assert_eq!(titles, vec!["2048", "Hextris", "Tetris"]);
        assert!(lowercase.is_empty());
    }

    #[tokio::test]
    async fn test_query_search_is_case_insensitive_substring() {
        let repo = seeded_repo().await;

        let games = repo
            .query_games(&GameFilter::new().with_search("TRIS"))
            .await
            .unwrap();

        let titles: Vec<&str> = games.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Tetris", "Hextris"]);
    }

    #[tokio::test]
    async fn test_query_search_folds_non_ascii_case() {
        let repo = SqliteRepository::new_in_memory().await.unwrap();
        repo.insert_game(candidate("Élan Vital", "Puzzle", false)).await.unwrap();
        repo.insert_game(candidate("ÜBERSPIEL", "Action", false)).await.unwrap();

        let elan = repo
            .query_games(&GameFilter::new().with_search("élan"))
            .await
            .unwrap();
        let uber = repo
            .query_games(&GameFilter::new().with_search("überspiel"))
            .await
            .unwrap();

        assert_eq!(elan.len(), 1);
        assert_eq!(elan[0].title, "Élan Vital");
        assert_eq!(uber.len(), 1);
        assert_eq!(uber[0].title, "ÜBERSPIEL");
    }

    #[tokio::test]
    async fn test_query_search_treats_wildcards_literally() {
        let repo = seeded_repo().await;

        let games = repo
            .query_games(&GameFilter::new().with_search("%"))
            .await
            .unwrap();

        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_query_combines_search_and_category() {
        let repo = seeded_repo().await;

        let games = repo
            .query_games(&GameFilter::new().with_search("tris").with_category("Puzzle"))
            .await
            .unwrap();
        let none = repo
            .query_games(&GameFilter::new().with_search("tris").with_category("Arcade"))
            .await
            .unwrap();

        assert_eq!(games.len(), 2);
        assert!(none.is_empty());
    }
}
