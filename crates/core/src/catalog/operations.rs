use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use super::filter::GameFilter;
use super::types::Game;

/// Largest integer a JSON number represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns true if the game satisfies every constraint of the filter.
///
/// `search` is a case-insensitive substring of the title only; `category`
/// must match exactly.
pub fn matches_filter(game: &Game, filter: &GameFilter) -> bool {
    filter
        .search
        .as_deref()
        .is_none_or(|search| game.title.to_lowercase().contains(&search.to_lowercase()))
        && filter
            .category
            .as_deref()
            .is_none_or(|category| game.category == category)
}

/// Filters games by the given filter, preserving input order.
pub fn filter_games<'a>(games: &'a [Game], filter: &GameFilter) -> Vec<&'a Game> {
    games
        .iter()
        .filter(|game| matches_filter(game, filter))
        .collect()
}

/// Catalog order: featured first, then newest first, then latest insertion.
pub fn catalog_order(a: &Game, b: &Game) -> Ordering {
    b.is_featured
        .cmp(&a.is_featured)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// Sorts games into catalog order.
pub fn sort_games(games: &mut [Game]) {
    games.sort_by(catalog_order);
}

/// Coerces a raw path segment into a game id.
///
/// Surrounding whitespace is ignored and integral numbers written in any
/// decimal form (`"7"`, `"7.0"`, `"7e0"`) are accepted. Everything else
/// yields `None`, which matches no record.
pub fn coerce_game_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<i64>() {
        return Some(id);
    }

    let value: f64 = trimmed.parse().ok()?;
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER)
        .then_some(value as i64)
}

/// Creation timestamp for the next record: `now`, unless the clock went
/// backwards past the last assigned timestamp.
pub fn next_created_at(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match last {
        Some(last) if last > now => last,
        _ => now,
    }
}
