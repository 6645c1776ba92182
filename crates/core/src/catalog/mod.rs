mod error;
mod filter;
mod operations;
mod routes;
mod schema;
mod seed;
mod types;

pub use error::{QueryParamsError, SchemaError};
pub use filter::GameFilter;
pub use operations::{
    catalog_order, coerce_game_id, filter_games, matches_filter, next_created_at, sort_games,
};
pub use routes::{build_game_path, API_PREFIX, GAMES_PATH, GAMES_ROUTE, GAME_PATH, GAME_ROUTE};
pub use schema::{validate_game, validate_game_list, validate_new_game};
pub use seed::{seed_games, KNOWN_CATEGORIES};
pub use types::{Game, NewGame};
