//! HTTP paths shared by the server router and the client.
//!
//! Each segment is written once in a macro so both the relative routes and
//! the absolute paths can be built with `concat!`.

macro_rules! api_prefix {
    () => {
        "/api"
    };
}

macro_rules! games_segment {
    () => {
        "/games"
    };
}

/// Prefix under which the catalog API is mounted.
pub const API_PREFIX: &str = api_prefix!();

/// List and create route, relative to [`API_PREFIX`].
pub const GAMES_ROUTE: &str = games_segment!();

/// Get-by-id route template, relative to [`API_PREFIX`].
pub const GAME_ROUTE: &str = concat!(games_segment!(), "/{id}");

/// Absolute list and create path.
pub const GAMES_PATH: &str = concat!(api_prefix!(), games_segment!());

/// Absolute get-by-id path template.
pub const GAME_PATH: &str = concat!(api_prefix!(), games_segment!(), "/{id}");

/// Builds the absolute path of a single game.
pub fn build_game_path(id: i64) -> String {
    GAME_PATH.replace("{id}", &id.to_string())
}
