//! Game API operations.

use async_trait::async_trait;
use reqwest::StatusCode;

use gamehaven_core::catalog::{
    build_game_path, validate_game, validate_game_list, Game, GameFilter, NewGame, GAMES_PATH,
};

use super::{GameApi, GameHavenClient};
use crate::error::Result;

#[async_trait]
impl GameApi for GameHavenClient {
    async fn list_games(&self, filter: &GameFilter) -> Result<Vec<Game>> {
        let response = self
            .client
            .get(self.url(GAMES_PATH))
            .query(&filter.query_pairs())
            .send()
            .await?;
        self.handle_response(response, validate_game_list).await
    }

    async fn get_game(&self, id: i64) -> Result<Option<Game>> {
        let response = self.client.get(self.url(&build_game_path(id))).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(response, validate_game).await.map(Some)
    }

    async fn create_game(&self, game: &NewGame) -> Result<Game> {
        let response = self
            .client
            .post(self.url(GAMES_PATH))
            .json(game)
            .send()
            .await?;
        self.handle_response(response, validate_game).await
    }
}
