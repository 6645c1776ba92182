//! Pretty output formatting.

use gamehaven_core::catalog::Game;

use crate::client::health::HealthStatus;

/// Format a game for display.
pub fn format_game(game: &Game) -> String {
    let star = if game.is_featured { " *" } else { "" };
    let mut output = format!(
        "{}{} [{} / {}]\n  ID: {}\n  URL: {}\n  Added: {}",
        game.title,
        star,
        game.category,
        game.game_type,
        game.id,
        game.url,
        game.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if !game.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", game.description));
    }
    output
}

/// Format games for display.
pub fn format_games(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games found.".to_string();
    }
    let mut output = format!("GAMES ({})\n", games.len());
    output.push_str(&"-".repeat(40));
    for game in games {
        output.push_str(&format!("\n{}", format_game(game)));
        output.push('\n');
    }
    output
}

/// Format server health for display.
pub fn format_health(health: &HealthStatus) -> String {
    format!("Status: {}\nGames: {}", health.status, health.games)
}
