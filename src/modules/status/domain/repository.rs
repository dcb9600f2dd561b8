/// Repository trait for per-user play status records
use crate::modules::catalog::domain::GameId;
use crate::modules::status::domain::entities::StatusGame;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Insert a record. A concurrent insert for the same pair collapses into
    /// one row holding the last status written.
    async fn add(&self, status: &StatusGame) -> AppResult<()>;

    async fn get_by_user_and_game(
        &self,
        user_id: Uuid,
        game_id: GameId,
    ) -> AppResult<Option<StatusGame>>;

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<StatusGame>>;

    /// `NotFound` if the pair has no record
    async fn remove(&self, status: &StatusGame) -> AppResult<()>;

    /// Persist the record's current status
    async fn save_changes(&self, status: &StatusGame) -> AppResult<()>;
}
