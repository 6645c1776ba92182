//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. `created_at` is fixed-width RFC 3339 UTC text, so
//! text order is time order.

/// Name of the Unicode lowercasing function registered on every connection.
pub const FOLD_CASE_FN: &str = "fold_case";

/// SQL statement to create the games table.
pub const CREATE_TABLES: &str = r#"
-- Games table; AUTOINCREMENT guarantees ids are never reused
CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    url TEXT NOT NULL,
    thumbnail TEXT NOT NULL,
    type TEXT NOT NULL,
    category TEXT NOT NULL,
    is_featured INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL
);

-- Indexes for category filtering and catalog ordering
CREATE INDEX IF NOT EXISTS idx_games_category ON games(category);
CREATE INDEX IF NOT EXISTS idx_games_catalog_order
    ON games(is_featured DESC, created_at DESC, id DESC);

-- Serves the MAX(created_at) lookup done on every insert
CREATE INDEX IF NOT EXISTS idx_games_created_at ON games(created_at);
"#;

pub const INSERT_GAME: &str = r#"
INSERT INTO games (title, description, url, thumbnail, type, category, is_featured, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_LATEST_CREATED_AT: &str = r#"
SELECT MAX(created_at)
FROM games
"#;

pub const SELECT_GAME_BY_ID: &str = r#"
SELECT id, title, description, url, thumbnail, type, category, is_featured, created_at
FROM games
WHERE id = ?1
"#;

/// `?1` is the title search (NULL for none), `?2` the category (NULL for none).
///
/// Uses [`FOLD_CASE_FN`] because the built-in `lower()` only folds ASCII.
pub const SELECT_GAMES: &str = r#"
SELECT id, title, description, url, thumbnail, type, category, is_featured, created_at
FROM games
WHERE (?1 IS NULL OR instr(fold_case(title), fold_case(?1)) > 0)
  AND (?2 IS NULL OR category = ?2)
ORDER BY is_featured DESC, created_at DESC, id DESC
"#;

pub const COUNT_GAMES: &str = r#"
SELECT COUNT(*)
FROM games
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS games"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
        assert!(CREATE_TABLES.contains("ON games(created_at)"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_GAME.contains("INSERT"));
        assert!(SELECT_LATEST_CREATED_AT.contains("MAX(created_at)"));
        assert!(SELECT_GAME_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_GAMES.contains("ORDER BY is_featured DESC, created_at DESC, id DESC"));
        assert!(COUNT_GAMES.contains("COUNT(*)"));
        assert!(SELECT_GAMES.contains(&format!("{FOLD_CASE_FN}(title)")));
    }
}
