use std::fmt;

use crate::catalog::{GameFilter, GAMES_PATH, GAME_PATH};

/// Identity of a cached query family, named after its endpoint template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListGames,
    GetGame,
}

impl Operation {
    /// The endpoint path template this operation reads from.
    pub fn path(self) -> &'static str {
        match self {
            Operation::ListGames => GAMES_PATH,
            Operation::GetGame => GAME_PATH,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Cache key: the operation identity plus the arguments it was called with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    List {
        search: Option<String>,
        category: Option<String>,
    },
    Game {
        id: i64,
    },
}

impl QueryKey {
    /// Returns the cache key for a list query.
    pub fn list(filter: &GameFilter) -> Self {
        QueryKey::List {
            search: filter.search.clone(),
            category: filter.category.clone(),
        }
    }

    /// Returns the cache key for a single game.
    pub fn game(id: i64) -> Self {
        QueryKey::Game { id }
    }

    pub fn operation(&self) -> Operation {
        match self {
            QueryKey::List { .. } => Operation::ListGames,
            QueryKey::Game { .. } => Operation::GetGame,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::List { search, category } => write!(
                f,
                "{}:{}:{}",
                Operation::ListGames,
                search.as_deref().unwrap_or("*"),
                category.as_deref().unwrap_or("*")
            ),
            QueryKey::Game { id } => write!(f, "{}:{id}", Operation::GetGame),
        }
    }
}
