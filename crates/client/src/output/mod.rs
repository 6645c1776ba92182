//! Output formatting functions.
//!
//! Everything the CLI prints implements [`Render`], so commands pick the
//! format once with [`render`].

pub mod json;
pub mod pretty;

use serde::Serialize;

use gamehaven_core::catalog::Game;

use crate::cli::OutputFormat;
use crate::client::health::HealthStatus;

/// A value with a human-readable form.
pub trait Render: Serialize {
    fn pretty(&self) -> String;
}

impl Render for Game {
    fn pretty(&self) -> String {
        pretty::format_game(self)
    }
}

impl Render for Vec<Game> {
    fn pretty(&self) -> String {
        pretty::format_games(self)
    }
}

impl Render for Vec<&str> {
    fn pretty(&self) -> String {
        self.join("\n")
    }
}

impl Render for HealthStatus {
    fn pretty(&self) -> String {
        pretty::format_health(self)
    }
}

/// Format a value in the requested output format.
pub fn render<T: Render>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => value.pretty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_health() {
        let health = HealthStatus {
            status: "ok".to_string(),
            games: 7,
        };

        assert_eq!(render(&health, OutputFormat::Pretty), "Status: ok\nGames: 7");
        assert_eq!(
            render(&health, OutputFormat::Json),
            r#"{"status":"ok","games":7}"#
        );
    }

    #[test]
    fn test_render_categories() {
        let categories = vec!["Action", "Puzzle"];

        assert_eq!(render(&categories, OutputFormat::Pretty), "Action\nPuzzle");
        assert_eq!(
            render(&categories, OutputFormat::Json),
            r#"["Action","Puzzle"]"#
        );
    }

    #[test]
    fn test_render_empty_list() {
        let games: Vec<Game> = Vec::new();

        assert_eq!(render(&games, OutputFormat::Pretty), "No games found.");
        assert_eq!(render(&games, OutputFormat::Json), "[]");
    }
}
