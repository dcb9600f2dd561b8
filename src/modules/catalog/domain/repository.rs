/// Read-only port onto the game catalog.
use super::entities::{GameId, GameRecord};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn exists(&self, game_id: GameId) -> AppResult<bool>;

    async fn get_by_id(&self, game_id: GameId) -> AppResult<Option<GameRecord>>;

    /// Batch lookup; ids the catalog doesn't know are skipped.
    async fn get_many(&self, game_ids: &[GameId]) -> AppResult<Vec<GameRecord>>;
}
