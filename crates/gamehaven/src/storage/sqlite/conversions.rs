//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::Row;

use gamehaven_core::catalog::Game;

/// Convert a SQLite row to a Game.
///
/// Expected columns: id, title, description, url, thumbnail, type, category,
/// is_featured, created_at
pub fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    let created_at: String = row.get(8)?;

    Ok(Game {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        url: row.get(3)?,
        thumbnail: row.get(4)?,
        game_type: row.get(5)?,
        category: row.get(6)?,
        is_featured: row.get(7)?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a datetime from RFC 3339 string.
pub fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Truncate to the precision SQLite stores.
pub fn storage_precision(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(6)
}

/// Format a DateTime<Utc> for SQLite storage (fixed-width RFC 3339, microseconds).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}
