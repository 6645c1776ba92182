//! Catalog handlers: list, get by id and create.

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use gamehaven_core::catalog::{coerce_game_id, validate_new_game, Game, GameFilter, SchemaError};
use gamehaven_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// List games matching the optional `search` and `category` filters (GET /api/games).
pub async fn list_games(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<Game>>, AppError> {
    let filter = GameFilter::from_query_string(query.as_deref())?;

    let games = state.games.query_games(&filter).await?;

    tracing::debug!(
        search = filter.search.as_deref().unwrap_or(""),
        category = filter.category.as_deref().unwrap_or(""),
        count = games.len(),
        "Listed games"
    );

    Ok(Json(games))
}

/// Get a single game by id (GET /api/games/{id}).
///
/// Segments that are not an integer match no game, so they answer 404.
pub async fn get_game(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Game>, AppError> {
    let not_found = || RepositoryError::game_not_found(&raw_id);

    let id = coerce_game_id(&raw_id).ok_or_else(not_found)?;
    let game = state.games.get_game(id).await?.ok_or_else(not_found)?;

    Ok(Json(game))
}

/// Create a game (POST /api/games).
///
/// The body is read as raw bytes so malformed JSON is reported with the same
/// `{message, field}` shape as a schema failure. An empty body counts as `{}`.
pub async fn create_game(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Game>), AppError> {
    let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Default::default())
    } else {
        serde_json::from_slice(&body).map_err(|_| SchemaError::new("Malformed JSON body", ""))?
    };

    let candidate = validate_new_game(&value)?;
    let game = state.games.insert_game(candidate).await?;

    tracing::info!(game_id = game.id, title = %game.title, "Created game");

    Ok((StatusCode::CREATED, Json(game)))
}
