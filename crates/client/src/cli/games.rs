//! Game CLI commands.

use clap::{Args, Parser, Subcommand};

use gamehaven_core::catalog::NewGame;

/// Game catalog commands.
#[derive(Debug, Parser)]
pub struct GamesCommand {
    #[command(subcommand)]
    pub action: GamesAction,
}

/// Available game actions.
#[derive(Debug, Subcommand)]
pub enum GamesAction {
    /// List games, featured first.
    List {
        /// Case-insensitive title substring.
        #[arg(long)]
        search: Option<String>,
        /// Exact category.
        #[arg(long)]
        category: Option<String>,
    },
    /// Get game by ID.
    Get {
        /// Game ID.
        id: i64,
    },
    /// Publish a new game.
    Create(CreateGameArgs),
    /// Show the browse categories.
    Categories,
}

/// Fields of a new game.
#[derive(Debug, Args)]
pub struct CreateGameArgs {
    /// Game title.
    #[arg(long)]
    pub title: String,
    /// Short description.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Playable URL.
    #[arg(long)]
    pub url: String,
    /// Thumbnail image URL.
    #[arg(long, default_value = "")]
    pub thumbnail: String,
    /// Game type tag (html5, emulator, flash).
    #[arg(long = "type", default_value = "html5")]
    pub game_type: String,
    /// Category.
    #[arg(long)]
    pub category: String,
    /// Show the game in the featured section.
    #[arg(long)]
    pub featured: bool,
}

impl CreateGameArgs {
    pub fn into_new_game(self) -> NewGame {
        NewGame::new(
            self.title,
            self.description,
            self.url,
            self.thumbnail,
            self.game_type,
            self.category,
        )
        .featured(self.featured)
    }
}
