//! gamehaven-client CLI entry point.

use clap::Parser;

use gamehaven_client::cli::games::GamesAction;
use gamehaven_client::cli::health::HealthAction;
use gamehaven_client::cli::{Cli, Commands};
use gamehaven_client::output::render;
use gamehaven_client::{GameApi, GameHavenClient};
use gamehaven_core::catalog::{GameFilter, KNOWN_CATEGORIES};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = GameHavenClient::new(&cli.base_url);

    match cli.command {
        Commands::Games(games_cmd) => match games_cmd.action {
            GamesAction::List { search, category } => {
                let filter = GameFilter::new()
                    .with_search(search.unwrap_or_default())
                    .with_category(category.unwrap_or_default());
                let games = client.list_games(&filter).await?;
                println!("{}", render(&games, cli.format));
            }
            GamesAction::Get { id } => match client.get_game(id).await? {
                Some(game) => println!("{}", render(&game, cli.format)),
                None => {
                    eprintln!("Game {id} not found");
                    std::process::exit(1);
                }
            },
            GamesAction::Create(args) => {
                let game = client.create_game(&args.into_new_game()).await?;
                println!("{}", render(&game, cli.format));
            }
            GamesAction::Categories => {
                println!("{}", render(&KNOWN_CATEGORIES.to_vec(), cli.format));
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                let alive = client.livez().await?;
                println!("{}", if alive { "ok" } else { "unavailable" });
                if !alive {
                    std::process::exit(1);
                }
            }
            HealthAction::Store => {
                let health = client.health().await?;
                println!("{}", render(&health, cli.format));
            }
        },
    }

    Ok(())
}
